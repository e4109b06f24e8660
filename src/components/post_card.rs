//! Post Card Component
//!
//! A single reply with its author line, rendered body and delete control.

use leptos::prelude::*;

use crate::components::{AuthorLine, DeleteConfirmButton};
use crate::markdown::render_content;
use crate::models::Post;

#[component]
pub fn PostCard(
    post: Post,
    /// Show the delete control (visitor is logged in)
    can_delete: bool,
    /// Called with the post id once deletion is confirmed
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = post.id;
    let body = render_content(&post.content);

    view! {
        <article class="post" id=format!("post-{}", id)>
            <AuthorLine
                author=post.author
                name=post.author_name
                avatar=post.author_avatar
                created=post.created
            />
            <div class="post-content" inner_html=body></div>
            {can_delete.then(|| view! {
                <DeleteConfirmButton
                    button_class="post-delete-btn"
                    on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                />
            })}
        </article>
    }
}
