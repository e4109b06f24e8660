//! Message Lookup
//!
//! Maps message keys (also used by the server as error codes) to display text.

use std::collections::HashMap;

const ENGLISH: &[(&str, &str)] = &[
    // Notifications
    ("postCreated", "Post created"),
    ("postDeleted", "Post deleted"),
    ("threadDeleted", "Thread deleted"),
    ("fillAllFields", "Please fill in all fields"),
    ("wrongLogin", "Wrong username or password"),
    ("wrongCaptcha", "Wrong captcha"),
    ("profileSaved", "Profile saved"),
    ("changedUsername", "Username changed"),
    ("emptyUsername", "The username must not be empty"),
    ("usernameMaxLength", "The username must not be longer than 32 characters"),
    ("requestFailed", "Request failed, please try again"),
    // Labels
    ("editProfile", "Edit profile"),
    ("editAvatar", "Change avatar"),
    ("username", "Username"),
    ("website", "Website"),
    ("save", "Save"),
    ("post", "Post"),
    ("content", "Content"),
    ("captcha", "Captcha"),
    ("delete", "Delete"),
    ("deleteConfirm", "Delete?"),
    ("close", "Close"),
    ("logs", "Logs"),
    ("upload", "Upload"),
    ("loading", "Loading..."),
    ("loadFailed", "Could not load this page"),
    ("noThreads", "No threads yet"),
    ("noPosts", "No replies yet"),
    ("notLoggedIn", "Please log in first"),
    ("notFound", "Page not found"),
    ("selectBoard", "Choose a board to start"),
];

#[derive(Debug, Clone)]
pub struct Language {
    messages: HashMap<String, String>,
}

impl Default for Language {
    fn default() -> Self {
        Self::from_pairs(ENGLISH.iter().copied())
    }
}

impl Language {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            messages: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Display text for a key the UI owns; the key itself when missing
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    /// Translate a server error if it is a known key, otherwise show it verbatim
    pub fn resolve(&self, message: &str) -> String {
        self.text(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        let lang = Language::default();
        assert_eq!(lang.get("wrongCaptcha"), Some("Wrong captcha"));
        assert_eq!(lang.get("nope"), None);
        assert_eq!(lang.resolve("emptyUsername"), "The username must not be empty");
        assert_eq!(lang.resolve("pq: duplicate key"), "pq: duplicate key");
    }

    #[test]
    fn test_custom_table() {
        let lang = Language::from_pairs([("postCreated", "Beitrag erstellt")]);
        assert_eq!(lang.text("postCreated"), "Beitrag erstellt");
        assert_eq!(lang.text("postDeleted"), "postDeleted");
    }
}
