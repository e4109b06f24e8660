//! Gorum API Wrappers
//!
//! Typed bindings to the remote JSON API, organized by domain. Every call goes
//! through the [`Api`] trait so pages can be driven by the browser transport or
//! by an in-memory double.

mod board;
mod captcha;
mod http;
mod thread;
mod user;

#[cfg(test)]
pub mod mock;

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export all public items
pub use board::*;
pub use captcha::*;
pub use http::HttpApi;
pub use thread::*;
pub use user::*;

/// Remote endpoints, served under `/api/<name>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Board,
    Threads,
    Thread,
    Posts,
    NewPost,
    DeleteThread,
    DeletePost,
    User,
    UserData,
    SetUserData,
    EditUsername,
    Captcha,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Board => "board",
            Endpoint::Threads => "threads",
            Endpoint::Thread => "thread",
            Endpoint::Posts => "posts",
            Endpoint::NewPost => "newpost",
            Endpoint::DeleteThread => "deletethread",
            Endpoint::DeletePost => "deletepost",
            Endpoint::User => "user",
            Endpoint::UserData => "userdata",
            Endpoint::SetUserData => "setuserdata",
            Endpoint::EditUsername => "editusername",
            Endpoint::Captcha => "captcha",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-level failures. Refusals reported by the server travel inside
/// successful responses and are modelled per endpoint instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("request could not be encoded: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Request function keyed by endpoint
#[allow(async_fn_in_trait)]
pub trait Api {
    async fn call<A, R>(&self, endpoint: Endpoint, args: &A) -> Result<R, ApiError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned;
}

/// List endpoints answer a map keyed by opaque strings; an array or `null`
/// is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Records<T> {
    Keyed(BTreeMap<String, T>),
    Listed(Vec<T>),
}

fn into_records<T>(records: Option<Records<T>>) -> BTreeMap<String, T> {
    match records {
        Some(Records::Keyed(map)) => map,
        Some(Records::Listed(list)) => list
            .into_iter()
            .enumerate()
            .map(|(i, record)| (format!("{:08}", i), record))
            .collect(),
        None => BTreeMap::new(),
    }
}

/// Answer of endpoints that only acknowledge (`done` for deletions, `success`
/// for profile updates)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Ack {
    done: bool,
    success: bool,
    error: Option<String>,
}

/// Outcome of a state-changing call
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Done,
    /// Server refused; carries its error code or message (may be empty)
    Refused(String),
}

impl ActionOutcome {
    fn from_done(ack: Ack) -> Self {
        if ack.done {
            ActionOutcome::Done
        } else {
            ActionOutcome::Refused(ack.error.unwrap_or_default())
        }
    }

    fn from_success(ack: Ack) -> Self {
        if ack.success {
            ActionOutcome::Done
        } else {
            ActionOutcome::Refused(ack.error.unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_names() {
        assert_eq!(Endpoint::NewPost.as_str(), "newpost");
        assert_eq!(Endpoint::EditUsername.to_string(), "editusername");
    }

    #[test]
    fn test_ack_outcomes() {
        let done: Ack = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(ActionOutcome::from_done(done), ActionOutcome::Done);

        let refused: Ack = serde_json::from_str(r#"{"done":false,"error":"403"}"#).unwrap();
        assert_eq!(ActionOutcome::from_done(refused), ActionOutcome::Refused("403".into()));

        // `done` does not satisfy endpoints that answer with `success`
        let wrong_flag: Ack = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(ActionOutcome::from_success(wrong_flag), ActionOutcome::Refused(String::new()));
    }

    #[test]
    fn test_records_shapes() {
        let keyed: Option<Records<u32>> = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(into_records(keyed).into_values().collect::<Vec<_>>(), vec![1, 2]);

        let listed: Option<Records<u32>> = serde_json::from_str("[7,8]").unwrap();
        assert_eq!(into_records(listed).into_values().collect::<Vec<_>>(), vec![7, 8]);

        let null: Option<Records<u32>> = serde_json::from_str("null").unwrap();
        assert!(into_records(null).is_empty());
    }

    #[test]
    fn test_decode_error_classification() {
        let err = serde_json::from_str::<Ack>("{").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
