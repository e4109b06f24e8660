//! Page Logic
//!
//! What each page does with the API, independent of rendering. Actions return
//! the UI effects they call for; components apply them to the store and
//! context.

pub mod board;
pub mod profile;
pub mod thread;

use crate::models::Post;
use crate::route::Route;

/// UI effect requested by an action
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    /// Show a snackbar message
    Notify(String),
    Navigate(Route),
    /// Full replace of the thread's post list
    ReplacePosts(Vec<Post>),
    /// Merge one post into the ordered list
    InsertPost(Post),
    /// Show a new challenge and clear the typed answer
    NewChallenge(Option<String>),
    /// Clear the new post text
    ClearDraft,
    /// The visitor's username changed
    Renamed(String),
}

fn notify_unless_empty(reactions: &mut Vec<Reaction>, message: String) {
    if !message.is_empty() {
        reactions.push(Reaction::Notify(message));
    }
}
