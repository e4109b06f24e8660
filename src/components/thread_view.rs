//! Thread View Component
//!
//! Opening post, replies in reading order, reply form and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AuthorLine, DeleteConfirmButton, NewPostForm, PostCard};
use crate::context::use_app_context;
use crate::markdown::render_content;
use crate::remote::Remote;
use crate::route::Route;
use crate::store::{store_reset_thread, store_set_challenge, use_app_store, AppStateStoreFields};
use crate::views::thread::{delete_post, delete_thread, load_posts, load_thread, request_challenge};
use crate::views::Reaction;

#[component]
pub fn ThreadView(thread_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let visit = ctx.current_visit();

    // Load thread, posts and a challenge on mount
    Effect::new(move |_| {
        store_reset_thread(&store);
        spawn_local(async move {
            let thread = load_thread(&ctx.api(), thread_id).await;
            if !ctx.is_current(visit) {
                return;
            }
            if let Some(t) = thread.loaded() {
                ctx.set_page_title(&t.name);
            }
            store.thread().set(thread);
        });
        spawn_local(async move {
            let posts = load_posts(&ctx.api(), thread_id).await;
            if let Remote::Loaded(list) = &posts {
                log::info!("[THREAD] loaded {} posts for thread {}", list.len(), thread_id);
            }
            if ctx.is_current(visit) {
                store.posts().set(posts);
            }
        });
        spawn_local(async move {
            if let Reaction::NewChallenge(challenge) = request_challenge(&ctx.api()).await {
                if ctx.is_current(visit) {
                    store_set_challenge(&store, challenge);
                }
            }
        });
    });

    let on_delete_thread = Callback::new(move |_: ()| {
        let Some(thread) = store.thread().get_untracked().loaded().cloned() else {
            return;
        };
        let session = ctx.session.get_untracked();
        spawn_local(async move {
            let reactions = delete_thread(&ctx.api(), &session, &ctx.language(), &thread).await;
            ctx.apply(visit, &store, reactions);
        });
    });

    let on_delete_post = Callback::new(move |post_id: i64| {
        let session = ctx.session.get_untracked();
        spawn_local(async move {
            let reactions = delete_post(&ctx.api(), &session, &ctx.language(), thread_id, post_id).await;
            ctx.apply(visit, &store, reactions);
        });
    });

    let logged_in = move || ctx.session.with(|s| s.is_logged_in());

    view! {
        <section class="thread-page">
            {move || match store.thread().get() {
                Remote::Loading => view! { <p class="loading">{ctx.text("loading")}</p> }.into_any(),
                Remote::Failed(error) => view! {
                    <p class="load-failed" title=error>{ctx.text("loadFailed")}</p>
                }.into_any(),
                Remote::Loaded(thread) => {
                    let body = render_content(&thread.content);
                    view! {
                        <article class="thread-head">
                            <a class="back-link" href=Route::Board(thread.board).href()>"←"</a>
                            <h1>{thread.name}</h1>
                            <AuthorLine
                                author=thread.author
                                name=thread.author_name
                                avatar=thread.author_avatar
                                created=thread.created
                            />
                            <div class="post-content" inner_html=body></div>
                            <Show when=logged_in>
                                <DeleteConfirmButton button_class="thread-delete-btn" on_confirm=on_delete_thread />
                            </Show>
                        </article>
                    }.into_any()
                }
            }}

            {move || match store.posts().get() {
                Remote::Loading => view! { <p class="loading">{ctx.text("loading")}</p> }.into_any(),
                Remote::Failed(error) => view! {
                    <p class="load-failed" title=error>{ctx.text("loadFailed")}</p>
                }.into_any(),
                Remote::Loaded(posts) if posts.is_empty() => view! {
                    <p class="empty">{ctx.text("noPosts")}</p>
                }.into_any(),
                Remote::Loaded(posts) => {
                    let can_delete = logged_in();
                    view! {
                        <div class="post-list">
                            {posts.into_iter().map(|post| view! {
                                <PostCard post=post can_delete=can_delete on_delete=on_delete_post />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            <NewPostForm thread_id=thread_id />
        </section>
    }
}
