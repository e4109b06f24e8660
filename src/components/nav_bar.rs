//! Navigation Bar Component
//!
//! Site title and profile link, plus the log panel.

use leptos::prelude::*;

use crate::components::LogPanel;
use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let title = ctx.config().title;

    view! {
        <nav class="nav-bar">
            <a class="nav-title" href=Route::Home.href()>{title}</a>
            {move || {
                let session = ctx.session.get();
                session.is_logged_in().then(|| view! {
                    <a class="nav-profile" href=Route::EditProfile.href() title=ctx.text("editProfile")>
                        {session.username.clone()}
                    </a>
                })
            }}
            <LogPanel />
        </nav>
    }
}
