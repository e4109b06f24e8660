//! Author Line Component
//!
//! Avatar, linked author name and creation time of a thread or post.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::format_timestamp;
use crate::route::Route;

#[component]
pub fn AuthorLine(author: i64, name: String, avatar: String, created: i64) -> impl IntoView {
    let config = use_app_context().config();

    view! {
        <div class="author-line">
            <img class="avatar" src=config.avatar_url(&avatar) alt="" />
            <a class="author-name" href=Route::User(author).href()>{name}</a>
            <time class="created">{format_timestamp(created)}</time>
        </div>
    }
}
