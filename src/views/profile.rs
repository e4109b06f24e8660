//! Profile editor: auxiliary fields, renaming and the avatar dialog.
//!
//! Saving the `website` field and renaming are two independent calls; either
//! may succeed while the other fails, and each reports on its own.

use base64::prelude::{Engine, BASE64_STANDARD};

use super::{notify_unless_empty, Reaction};
use crate::api::{self, ActionOutcome, Api};
use crate::i18n::Language;
use crate::models::{User, UserData};
use crate::remote::Remote;
use crate::route::Route;
use crate::session::Session;

pub const MAX_USERNAME_LEN: usize = 32;

/// Auxiliary fields shown in the editor
pub const PROFILE_FIELDS: &[&str] = &["website"];
pub const WEBSITE_FIELD: &str = "website";

/// What to do with the username field on save
#[derive(Debug, Clone, PartialEq)]
pub enum UsernameChange {
    Unchanged,
    /// Rejected locally; carries the message key
    Rejected(&'static str),
    Rename(String),
}

/// Length is counted in UTF-16 code units, as the server's form does
pub fn check_username(current: &str, proposed: &str) -> UsernameChange {
    if proposed == current {
        UsernameChange::Unchanged
    } else if proposed.is_empty() {
        UsernameChange::Rejected("emptyUsername")
    } else if proposed.encode_utf16().count() > MAX_USERNAME_LEN {
        UsernameChange::Rejected("usernameMaxLength")
    } else {
        UsernameChange::Rename(proposed.to_string())
    }
}

pub async fn load_user(api: &impl Api, username: &str) -> Remote<User> {
    api::get_user(api, username).await.into()
}

pub async fn load_user_by_id(api: &impl Api, user_id: i64) -> Remote<User> {
    api::get_user_by_id(api, user_id).await.into()
}

pub async fn load_user_data(api: &impl Api, username: &str) -> Remote<UserData> {
    api::get_user_data(api, username, PROFILE_FIELDS).await.into()
}

/// Website shown on the user page, if one is set
pub fn website_link(data: &Remote<UserData>) -> Option<String> {
    data.loaded()
        .map(|fields| fields.get(WEBSITE_FIELD))
        .filter(|site| !site.is_empty())
        .map(str::to_string)
}

fn refused(lang: &Language, reactions: &mut Vec<Reaction>, error: &str) {
    notify_unless_empty(reactions, lang.resolve(error));
}

pub async fn save_profile(
    api: &impl Api,
    session: &Session,
    lang: &Language,
    user_id: i64,
    website: &str,
    proposed_username: &str,
) -> Vec<Reaction> {
    let mut reactions = Vec::new();

    match api::set_user_data(api, session, WEBSITE_FIELD, website).await {
        Ok(ActionOutcome::Done) => {
            reactions.push(Reaction::Notify(lang.text("profileSaved")));
            reactions.push(Reaction::Navigate(Route::User(user_id)));
        }
        Ok(ActionOutcome::Refused(error)) => refused(lang, &mut reactions, &error),
        Err(e) => {
            log::error!("[PROFILE] saving {} failed: {}", WEBSITE_FIELD, e);
            reactions.push(Reaction::Notify(lang.text("requestFailed")));
        }
    }

    match check_username(&session.username, proposed_username) {
        UsernameChange::Unchanged => {}
        UsernameChange::Rejected(key) => reactions.push(Reaction::Notify(lang.text(key))),
        UsernameChange::Rename(new_username) => match api::edit_username(api, session, &new_username).await {
            Ok(ActionOutcome::Done) => {
                reactions.push(Reaction::Renamed(new_username));
                reactions.push(Reaction::Notify(lang.text("changedUsername")));
            }
            Ok(ActionOutcome::Refused(error)) => refused(lang, &mut reactions, &error),
            Err(e) => {
                log::error!("[PROFILE] rename failed: {}", e);
                reactions.push(Reaction::Notify(lang.text("requestFailed")));
            }
        },
    }

    reactions
}

/// Hidden fields of the avatar upload form
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarForm {
    pub username: String,
    pub token: String,
}

impl AvatarForm {
    pub fn for_session(session: &Session) -> Self {
        Self {
            username: BASE64_STANDARD.encode(session.username.as_bytes()),
            token: session.token.clone(),
        }
    }
}
