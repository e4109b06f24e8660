//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each fetched value
//! has its own field so independent requests never overwrite each other.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{insert_post_sorted, Board, Post, Thread, User, UserData};
use crate::remote::Remote;

/// Page data, reset whenever its page is (re)opened
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Board page
    pub board: Remote<Board>,
    pub threads: Remote<Vec<Thread>>,
    /// Thread page
    pub thread: Remote<Thread>,
    pub posts: Remote<Vec<Post>>,
    /// Current challenge id (None while none is available)
    pub challenge: Option<String>,
    pub captcha_answer: String,
    pub draft: String,
    /// Profile and user pages
    pub user: Remote<User>,
    pub user_data: Remote<UserData>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_reset_board(store: &AppStore) {
    store.board().set(Remote::Loading);
    store.threads().set(Remote::Loading);
}

pub fn store_reset_thread(store: &AppStore) {
    store.thread().set(Remote::Loading);
    store.posts().set(Remote::Loading);
    store.challenge().set(None);
    store.captcha_answer().set(String::new());
    store.draft().set(String::new());
}

pub fn store_reset_user(store: &AppStore) {
    store.user().set(Remote::Loading);
    store.user_data().set(Remote::Loading);
}

/// Merge a freshly created post into the loaded list
pub fn store_insert_post(store: &AppStore, post: Post) {
    store.posts().update(|posts| match posts {
        Remote::Loaded(list) => insert_post_sorted(list, post),
        _ => {
            let mut list = Vec::new();
            insert_post_sorted(&mut list, post);
            *posts = Remote::Loaded(list);
        }
    });
}

/// Replace the thread's post list
pub fn store_replace_posts(store: &AppStore, posts: Vec<Post>) {
    store.posts().set(Remote::Loaded(posts));
}

/// Show a new challenge; the previous answer no longer applies
pub fn store_set_challenge(store: &AppStore, challenge: Option<String>) {
    store.challenge().set(challenge);
    store.captcha_answer().set(String::new());
}
