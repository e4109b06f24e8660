//! Gorum Frontend App
//!
//! Main application component: navigation bar, the page for the current
//! route and the snackbar.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BoardView, EditProfile, NavBar, Snackbar, ThreadView, UserView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::i18n::Language;
use crate::route::Route;
use crate::session::{BrowserStorage, Session};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::load(&BrowserStorage);
    log::info!("[APP] starting, logged in: {}", session.is_logged_in());

    // Provide context to all children
    let ctx = AppContext::new(AppConfig::from_env(), Language::default(), session);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Follow back/forward and typed addresses
    let _ = window_event_listener(ev::hashchange, move |_| ctx.sync_route());

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match ctx.visit.get().route {
                    Route::Home => {
                        ctx.set_document_title(&ctx.config().title);
                        view! { <p class="hint">{ctx.text("selectBoard")}</p> }.into_any()
                    }
                    Route::Board(id) => view! { <BoardView board_id=id /> }.into_any(),
                    Route::Thread(id) => view! { <ThreadView thread_id=id /> }.into_any(),
                    Route::User(id) => view! { <UserView user_id=id /> }.into_any(),
                    Route::EditProfile => view! { <EditProfile /> }.into_any(),
                    Route::NotFound => {
                        ctx.set_document_title(&ctx.config().title);
                        view! { <p class="not-found">{ctx.text("notFound")}</p> }.into_any()
                    }
                }}
            </main>
            <Snackbar />
        </div>
    }
}
