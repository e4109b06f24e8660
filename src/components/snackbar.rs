//! Snackbar Component
//!
//! Shows the latest notification and hides it after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const NOTICE_MILLIS: u32 = 4_000;

#[component]
pub fn Snackbar() -> impl IntoView {
    let ctx = use_app_context();

    // Auto-hide; a newer notice keeps its own timer
    Effect::new(move |_| {
        if let Some(notice) = ctx.notice.get() {
            let id = notice.id;
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_MILLIS).await;
                ctx.dismiss_notice(id);
            });
        }
    });

    move || {
        ctx.notice.get().map(|notice| {
            let id = notice.id;
            view! {
                <div class="snackbar" role="status">
                    <span class="snackbar-message">{notice.message}</span>
                    <button class="snackbar-close" on:click=move |_| ctx.dismiss_notice(id)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
