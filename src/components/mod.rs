//! UI Components
//!
//! Leptos components for the board, thread and profile pages.

mod author_line;
mod avatar_dialog;
mod board_view;
mod delete_confirm_button;
mod edit_profile;
mod log_panel;
mod nav_bar;
mod new_post_form;
mod post_card;
mod snackbar;
mod thread_card;
mod thread_view;
mod user_view;

pub use author_line::AuthorLine;
pub use avatar_dialog::AvatarDialog;
pub use board_view::BoardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_profile::EditProfile;
pub use log_panel::LogPanel;
pub use nav_bar::NavBar;
pub use new_post_form::NewPostForm;
pub use post_card::PostCard;
pub use snackbar::Snackbar;
pub use thread_card::ThreadCard;
pub use thread_view::ThreadView;
pub use user_view::UserView;
