//! Edit Profile Component
//!
//! Username and website editor plus the avatar dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AvatarDialog;
use crate::context::use_app_context;
use crate::store::{store_reset_user, use_app_store, AppStateStoreFields};
use crate::views::profile::{load_user, load_user_data, save_profile, WEBSITE_FIELD};

#[component]
pub fn EditProfile() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let visit = ctx.current_visit();

    let (username, set_username) = signal(String::new());
    let (website, set_website) = signal(String::new());
    let (avatar_open, set_avatar_open) = signal(false);

    // Load own record and auxiliary fields on mount
    Effect::new(move |_| {
        ctx.set_page_title(&ctx.text("editProfile"));
        store_reset_user(&store);
        let session = ctx.session.get_untracked();
        if !session.is_logged_in() {
            return;
        }
        set_username.set(session.username.clone());

        let name = session.username.clone();
        spawn_local(async move {
            let user = load_user(&ctx.api(), &name).await;
            if ctx.is_current(visit) {
                store.user().set(user);
            }
        });
        spawn_local(async move {
            let data = load_user_data(&ctx.api(), &session.username).await;
            if !ctx.is_current(visit) {
                return;
            }
            if let Some(fields) = data.loaded() {
                set_website.set(fields.get(WEBSITE_FIELD).to_string());
            }
            store.user_data().set(data);
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let session = ctx.session.get_untracked();
        let user_id = store.user().get_untracked().loaded().map_or(0, |u| u.id);
        let website = website.get_untracked();
        let username = username.get_untracked();

        spawn_local(async move {
            let lang = ctx.language();
            let reactions = save_profile(&ctx.api(), &session, &lang, user_id, &website, &username).await;
            ctx.apply(visit, &store, reactions);
        });
    };

    let logged_in = move || ctx.session.with(|s| s.is_logged_in());

    view! {
        <section class="profile-page">
            <h1>{ctx.text("editProfile")}</h1>
            <Show
                when=logged_in
                fallback=move || view! { <p class="hint">{ctx.text("notLoggedIn")}</p> }
            >
                <form class="profile-form" on:submit=save>
                    <label>
                        <span>{ctx.text("username")}</span>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        <span>{ctx.text("website")}</span>
                        <input
                            type="url"
                            prop:value=move || website.get()
                            on:input=move |ev| set_website.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="profile-actions">
                        <button type="button" on:click=move |_| set_avatar_open.set(true)>
                            {ctx.text("editAvatar")}
                        </button>
                        <button type="submit">{ctx.text("save")}</button>
                    </div>
                </form>
            </Show>
            <Show when=move || avatar_open.get()>
                <AvatarDialog on_close=Callback::new(move |_: ()| set_avatar_open.set(false)) />
            </Show>
        </section>
    }
}
