//! User View Component
//!
//! Public page of a user: avatar, name and website.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::remote::Remote;
use crate::route::Route;
use crate::store::{store_reset_user, use_app_store, AppStateStoreFields};
use crate::views::profile::{load_user_by_id, load_user_data, website_link};

#[component]
pub fn UserView(user_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let visit = ctx.current_visit();
    let config = ctx.config();

    // The field lookup is keyed by username, so it waits for the user record
    Effect::new(move |_| {
        store_reset_user(&store);
        spawn_local(async move {
            let api = ctx.api();
            let user = load_user_by_id(&api, user_id).await;
            if !ctx.is_current(visit) {
                return;
            }
            let username = user.loaded().map(|u| u.username().to_string());
            if let Some(name) = &username {
                ctx.set_page_title(name);
            }
            store.user().set(user);

            if let Some(name) = username {
                let data = load_user_data(&api, &name).await;
                if ctx.is_current(visit) {
                    store.user_data().set(data);
                }
            }
        });
    });

    let is_self = move |name: &str| ctx.session.with(|s| s.is_logged_in() && s.username == name);

    view! {
        <section class="user-page">
            {move || match store.user().get() {
                Remote::Loading => view! { <p class="loading">{ctx.text("loading")}</p> }.into_any(),
                Remote::Failed(error) => view! {
                    <p class="load-failed" title=error>{ctx.text("loadFailed")}</p>
                }.into_any(),
                Remote::Loaded(user) => {
                    let own = is_self(user.username());
                    view! {
                        <header class="user-header">
                            <img class="avatar large" src=config.avatar_url(user.avatar()) alt="" />
                            <h1>{user.username().to_string()}</h1>
                            {own.then(|| view! {
                                <a class="edit-profile-link" href=Route::EditProfile.href()>{ctx.text("editProfile")}</a>
                            })}
                        </header>
                    }.into_any()
                }
            }}
            {move || website_link(&store.user_data().get()).map(|site| {
                let href = site.clone();
                view! {
                    <p class="user-website">
                        <span>{ctx.text("website")}": "</span>
                        <a href=href rel="nofollow noopener" target="_blank">{site}</a>
                    </p>
                }
            })}
        </section>
    }
}
