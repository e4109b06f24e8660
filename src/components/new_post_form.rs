//! New Post Form Component
//!
//! Reply box with the captcha challenge. Text and answer live in the store so
//! a wrong answer or a successful post can reset them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::views::thread::{create_post, Draft};

#[component]
pub fn NewPostForm(thread_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = ctx.config();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = Draft {
            content: store.draft().get_untracked(),
            challenge: store.challenge().get_untracked().unwrap_or_default(),
            answer: store.captcha_answer().get_untracked(),
        };
        let session = ctx.session.get_untracked();
        let origin = ctx.current_visit();

        spawn_local(async move {
            let lang = ctx.language();
            let reactions = create_post(&ctx.api(), &session, &lang, thread_id, &draft).await;
            ctx.apply(origin, &store, reactions);
        });
    };

    view! {
        <form class="new-post-form" on:submit=submit>
            <textarea
                class="post-input"
                placeholder=ctx.text("content")
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            ></textarea>

            <div class="captcha-row">
                {move || store.challenge().get().map(|challenge| view! {
                    <img class="captcha-image" src=config.captcha_image_url(&challenge) alt=ctx.text("captcha") />
                })}
                <input
                    type="text"
                    class="captcha-input"
                    placeholder=ctx.text("captcha")
                    prop:value=move || store.captcha_answer().get()
                    on:input=move |ev| store.captcha_answer().set(event_target_value(&ev))
                />
            </div>

            <button type="submit">{ctx.text("post")}</button>
        </form>
    }
}
