//! Log Panel Component
//!
//! Recent log lines from the rolling logger, for bug reports.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |_| {
        if !open.get_untracked() {
            set_lines.set(rolling_logger::recent_lines());
        }
        set_open.update(|o| *o = !*o);
    };

    view! {
        <button class="nav-logs" on:click=toggle>{ctx.text("logs")}</button>
        <Show when=move || open.get()>
            <div class="log-panel">
                <pre>{move || lines.get().join("\n")}</pre>
                <button class="dialog-close" on:click=move |_| set_open.set(false)>
                    {ctx.text("close")}
                </button>
            </div>
        </Show>
    }
}
