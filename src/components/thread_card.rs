//! Thread Card Component
//!
//! One entry of a board's thread list.

use leptos::prelude::*;

use crate::components::AuthorLine;
use crate::models::Thread;
use crate::route::Route;

#[component]
pub fn ThreadCard(thread: Thread) -> impl IntoView {
    view! {
        <li class="thread-card">
            <a class="thread-link" href=Route::Thread(thread.id).href()>{thread.name}</a>
            <AuthorLine
                author=thread.author
                name=thread.author_name
                avatar=thread.author_avatar
                created=thread.created
            />
        </li>
    }
}
