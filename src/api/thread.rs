//! Thread Calls
//!
//! Bindings for thread metadata, posts, posting and deletion.

use serde::{Deserialize, Serialize};

use super::{into_records, Ack, ActionOutcome, Api, ApiError, Endpoint, Records};
use crate::models::{posts_from_records, Post, Thread};
use crate::session::Session;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ThreadIdArgs {
    #[serde(rename = "threadID")]
    thread_id: i64,
}

#[derive(Serialize)]
struct DeleteThreadArgs<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(rename = "threadID")]
    thread_id: i64,
}

#[derive(Serialize)]
struct DeletePostArgs<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(rename = "postID")]
    post_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewPostArgs<'a> {
    username: &'a str,
    password: &'a str,
    thread: i64,
    content: &'a str,
    /// Challenge id
    captcha: &'a str,
    /// User's answer to the challenge
    captcha_value: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NewPostResponse {
    error: Option<String>,
    id: Option<i64>,
    created: Option<i64>,
}

/// How the server answered a new post
#[derive(Debug, Clone, PartialEq)]
pub enum PostOutcome {
    /// Accepted; the server may report the new post's id and timestamp
    Created { id: Option<i64>, created: Option<i64> },
    /// `400`
    MissingFields,
    /// `403`
    WrongLogin,
    /// `403 captcha`
    WrongCaptcha,
    /// Any other error, shown as-is
    Rejected(String),
}

impl From<NewPostResponse> for PostOutcome {
    fn from(response: NewPostResponse) -> Self {
        match response.error.as_deref() {
            None | Some("") => PostOutcome::Created {
                id: response.id,
                created: response.created,
            },
            Some("400") => PostOutcome::MissingFields,
            Some("403") => PostOutcome::WrongLogin,
            Some("403 captcha") => PostOutcome::WrongCaptcha,
            Some(other) => PostOutcome::Rejected(other.to_string()),
        }
    }
}

// ========================
// Calls
// ========================

pub async fn get_thread(api: &impl Api, thread_id: i64) -> Result<Thread, ApiError> {
    api.call(Endpoint::Thread, &ThreadIdArgs { thread_id }).await
}

/// Posts of a thread, oldest first, placeholders removed
pub async fn list_posts(api: &impl Api, thread_id: i64) -> Result<Vec<Post>, ApiError> {
    let records: Option<Records<Post>> = api.call(Endpoint::Posts, &ThreadIdArgs { thread_id }).await?;
    Ok(posts_from_records(into_records(records)))
}

pub async fn new_post(
    api: &impl Api,
    session: &Session,
    thread_id: i64,
    content: &str,
    challenge: &str,
    answer: &str,
) -> Result<PostOutcome, ApiError> {
    let args = NewPostArgs {
        username: &session.username,
        password: &session.password,
        thread: thread_id,
        content,
        captcha: challenge,
        captcha_value: answer,
    };
    let response: NewPostResponse = api.call(Endpoint::NewPost, &args).await?;
    Ok(response.into())
}

pub async fn delete_thread(api: &impl Api, session: &Session, thread_id: i64) -> Result<ActionOutcome, ApiError> {
    let args = DeleteThreadArgs {
        username: &session.username,
        password: &session.password,
        thread_id,
    };
    let ack: Ack = api.call(Endpoint::DeleteThread, &args).await?;
    Ok(ActionOutcome::from_done(ack))
}

pub async fn delete_post(api: &impl Api, session: &Session, post_id: i64) -> Result<ActionOutcome, ApiError> {
    let args = DeletePostArgs {
        username: &session.username,
        password: &session.password,
        post_id,
    };
    let ack: Ack = api.call(Endpoint::DeletePost, &args).await?;
    Ok(ActionOutcome::from_done(ack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    fn outcome(value: serde_json::Value) -> PostOutcome {
        serde_json::from_value::<NewPostResponse>(value).unwrap().into()
    }

    #[test]
    fn test_post_outcome_taxonomy() {
        assert_eq!(outcome(json!({ "error": "400" })), PostOutcome::MissingFields);
        assert_eq!(outcome(json!({ "error": "403" })), PostOutcome::WrongLogin);
        assert_eq!(outcome(json!({ "error": "403 captcha" })), PostOutcome::WrongCaptcha);
        assert_eq!(outcome(json!({ "error": "db down" })), PostOutcome::Rejected("db down".into()));
        assert_eq!(outcome(json!({ "done": true })), PostOutcome::Created { id: None, created: None });
        assert_eq!(
            outcome(json!({ "id": 12, "created": 1700 })),
            PostOutcome::Created { id: Some(12), created: Some(1700) }
        );
    }

    #[tokio::test]
    async fn test_new_post_sends_credentials_and_challenge() {
        let api = MockApi::new();
        api.respond(Endpoint::NewPost, json!({}));
        let session = Session::new("ann", "pw", "tok");

        new_post(&api, &session, 7, "hello", "cid", "42").await.unwrap();

        assert_eq!(
            api.calls(),
            vec![(
                Endpoint::NewPost,
                json!({
                    "username": "ann",
                    "password": "pw",
                    "thread": 7,
                    "content": "hello",
                    "captcha": "cid",
                    "captchaValue": "42"
                })
            )]
        );
    }

    #[tokio::test]
    async fn test_delete_post_args() {
        let api = MockApi::new();
        api.respond(Endpoint::DeletePost, json!({ "done": true }));
        let session = Session::new("ann", "pw", "tok");

        let outcome = delete_post(&api, &session, 3).await.unwrap();
        assert_eq!(outcome, ActionOutcome::Done);
        assert_eq!(
            api.calls(),
            vec![(Endpoint::DeletePost, json!({ "username": "ann", "password": "pw", "postID": 3 }))]
        );
    }
}
