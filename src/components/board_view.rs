//! Board View Component
//!
//! Board header plus its threads, newest first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ThreadCard;
use crate::context::use_app_context;
use crate::remote::Remote;
use crate::store::{store_reset_board, use_app_store, AppStateStoreFields};
use crate::views::board::{board_title, load_board, load_threads};

#[component]
pub fn BoardView(board_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let visit = ctx.current_visit();

    // Load board and threads on mount; the two requests are independent
    Effect::new(move |_| {
        store_reset_board(&store);
        spawn_local(async move {
            let board = load_board(&ctx.api(), board_id).await;
            if !ctx.is_current(visit) {
                return;
            }
            if let Some(title) = board_title(&ctx.config(), &board) {
                ctx.set_document_title(&title);
            }
            store.board().set(board);
        });
        spawn_local(async move {
            let threads = load_threads(&ctx.api(), board_id).await;
            if let Remote::Loaded(list) = &threads {
                log::info!("[BOARD] loaded {} threads for board {}", list.len(), board_id);
            }
            if ctx.is_current(visit) {
                store.threads().set(threads);
            }
        });
    });

    view! {
        <section class="board-page">
            {move || store.board().get().loaded().cloned().map(|board| view! {
                <header class="board-header">
                    <span class="board-icon material-icons">{board.icon}</span>
                    <h1>{board.name}</h1>
                    <p class="board-description">{board.description}</p>
                </header>
            })}

            {move || match store.threads().get() {
                Remote::Loading => view! { <p class="loading">{ctx.text("loading")}</p> }.into_any(),
                Remote::Failed(error) => view! {
                    <p class="load-failed" title=error>{ctx.text("loadFailed")}</p>
                }.into_any(),
                Remote::Loaded(threads) if threads.is_empty() => view! {
                    <p class="empty">{ctx.text("noThreads")}</p>
                }.into_any(),
                Remote::Loaded(threads) => view! {
                    <ul class="thread-list">
                        {threads.into_iter().map(|thread| view! { <ThreadCard thread=thread /> }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}
