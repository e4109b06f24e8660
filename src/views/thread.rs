//! Thread page: metadata, posts in reading order, posting behind a captcha,
//! and deletion of the thread or single posts.

use super::{notify_unless_empty, Reaction};
use crate::api::{self, ActionOutcome, Api, PostOutcome};
use crate::i18n::Language;
use crate::models::{Post, Thread};
use crate::remote::Remote;
use crate::route::Route;
use crate::session::Session;

/// Text and challenge answer typed by the visitor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub content: String,
    pub challenge: String,
    pub answer: String,
}

pub async fn load_thread(api: &impl Api, thread_id: i64) -> Remote<Thread> {
    api::get_thread(api, thread_id).await.into()
}

pub async fn load_posts(api: &impl Api, thread_id: i64) -> Remote<Vec<Post>> {
    api::list_posts(api, thread_id).await.into()
}

pub async fn request_challenge(api: &impl Api) -> Reaction {
    match api::new_captcha(api).await {
        Ok(challenge) => Reaction::NewChallenge(challenge),
        Err(e) => {
            log::error!("[THREAD] captcha request failed: {}", e);
            Reaction::NewChallenge(None)
        }
    }
}

pub async fn delete_thread(api: &impl Api, session: &Session, lang: &Language, thread: &Thread) -> Vec<Reaction> {
    let mut reactions = Vec::new();
    match api::delete_thread(api, session, thread.id).await {
        Ok(ActionOutcome::Done) => {
            reactions.push(Reaction::Notify(lang.text("threadDeleted")));
            reactions.push(Reaction::Navigate(Route::Board(thread.board)));
        }
        Ok(ActionOutcome::Refused(error)) => notify_unless_empty(&mut reactions, error),
        Err(e) => {
            log::error!("[THREAD] delete thread {} failed: {}", thread.id, e);
            reactions.push(Reaction::Notify(lang.text("requestFailed")));
        }
    }
    reactions
}

pub async fn delete_post(api: &impl Api, session: &Session, lang: &Language, thread_id: i64, post_id: i64) -> Vec<Reaction> {
    let mut reactions = Vec::new();
    match api::delete_post(api, session, post_id).await {
        Ok(ActionOutcome::Done) => {
            if let Remote::Loaded(posts) = load_posts(api, thread_id).await {
                reactions.push(Reaction::ReplacePosts(posts));
            }
            reactions.push(Reaction::Notify(lang.text("postDeleted")));
        }
        Ok(ActionOutcome::Refused(error)) => notify_unless_empty(&mut reactions, error),
        Err(e) => {
            log::error!("[THREAD] delete post {} failed: {}", post_id, e);
            reactions.push(Reaction::Notify(lang.text("requestFailed")));
        }
    }
    reactions
}

pub async fn create_post(api: &impl Api, session: &Session, lang: &Language, thread_id: i64, draft: &Draft) -> Vec<Reaction> {
    let outcome = api::new_post(api, session, thread_id, &draft.content, &draft.challenge, &draft.answer).await;
    let mut reactions = Vec::new();
    match outcome {
        Ok(PostOutcome::Created { id, created }) => {
            reactions.push(Reaction::Notify(lang.text("postCreated")));
            match id {
                Some(id) => reactions.push(Reaction::InsertPost(Post {
                    id,
                    author_name: session.username.clone(),
                    content: draft.content.clone(),
                    created: created.unwrap_or_else(|| chrono::Utc::now().timestamp()),
                    ..Default::default()
                })),
                None => {
                    if let Remote::Loaded(posts) = load_posts(api, thread_id).await {
                        reactions.push(Reaction::ReplacePosts(posts));
                    }
                }
            }
            reactions.push(Reaction::ClearDraft);
            // challenges are single use
            reactions.push(request_challenge(api).await);
        }
        Ok(PostOutcome::MissingFields) => reactions.push(Reaction::Notify(lang.text("fillAllFields"))),
        Ok(PostOutcome::WrongLogin) => reactions.push(Reaction::Notify(lang.text("wrongLogin"))),
        Ok(PostOutcome::WrongCaptcha) => {
            reactions.push(Reaction::Notify(lang.text("wrongCaptcha")));
            reactions.push(request_challenge(api).await);
        }
        Ok(PostOutcome::Rejected(error)) => {
            reactions.push(Reaction::Notify(error));
            reactions.push(request_challenge(api).await);
        }
        Err(e) => {
            log::error!("[THREAD] new post in {} failed: {}", thread_id, e);
            reactions.push(Reaction::Notify(lang.text("requestFailed")));
        }
    }
    reactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::api::{ApiError, Endpoint};
    use serde_json::json;

    fn session() -> Session {
        Session::new("ann", "pw", "tok")
    }

    fn draft() -> Draft {
        Draft {
            content: "hello".into(),
            challenge: "c1".into(),
            answer: "1234".into(),
        }
    }

    fn thread() -> Thread {
        Thread {
            id: 7,
            board: 2,
            name: "Intro".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_posts_drops_placeholders() {
        let api = MockApi::new();
        api.respond(Endpoint::Posts, json!({
            "a": { "id": 2, "created": 50 },
            "b": { "id": 0, "created": 10 },
            "c": { "id": 1, "created": 20 }
        }));

        let posts = load_posts(&api, 7).await;
        let ids: Vec<i64> = posts.loaded().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(api.calls(), vec![(Endpoint::Posts, json!({ "threadID": 7 }))]);
    }

    #[tokio::test]
    async fn test_wrong_captcha_resets_challenge() {
        let api = MockApi::new();
        api.respond(Endpoint::NewPost, json!({ "error": "403 captcha" }));
        api.respond(Endpoint::Captcha, json!({ "captcha": "c2" }));
        let lang = Language::default();

        let reactions = create_post(&api, &session(), &lang, 7, &draft()).await;

        assert_eq!(
            reactions,
            vec![
                Reaction::Notify("Wrong captcha".into()),
                Reaction::NewChallenge(Some("c2".into())),
            ]
        );
        assert_eq!(api.count(Endpoint::Captcha), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_and_wrong_login_keep_challenge() {
        let api = MockApi::new();
        api.respond(Endpoint::NewPost, json!({ "error": "400" }));
        api.respond(Endpoint::NewPost, json!({ "error": "403" }));
        let lang = Language::default();

        let first = create_post(&api, &session(), &lang, 7, &draft()).await;
        let second = create_post(&api, &session(), &lang, 7, &draft()).await;

        assert_eq!(first, vec![Reaction::Notify(lang.text("fillAllFields"))]);
        assert_eq!(second, vec![Reaction::Notify(lang.text("wrongLogin"))]);
        assert_eq!(api.count(Endpoint::Captcha), 0);
    }

    #[tokio::test]
    async fn test_other_error_shown_verbatim_with_new_challenge() {
        let api = MockApi::new();
        api.respond(Endpoint::NewPost, json!({ "error": "thread closed" }));
        api.respond(Endpoint::Captcha, json!({ "captcha": "c3" }));

        let reactions = create_post(&api, &session(), &Language::default(), 7, &draft()).await;
        assert_eq!(
            reactions,
            vec![
                Reaction::Notify("thread closed".into()),
                Reaction::NewChallenge(Some("c3".into())),
            ]
        );
    }

    #[tokio::test]
    async fn test_created_post_is_merged_locally() {
        let api = MockApi::new();
        api.respond(Endpoint::NewPost, json!({ "id": 31, "created": 500 }));
        api.respond(Endpoint::Captcha, json!({ "captcha": "c4" }));

        let reactions = create_post(&api, &session(), &Language::default(), 7, &draft()).await;

        assert_eq!(reactions[0], Reaction::Notify("Post created".into()));
        let Reaction::InsertPost(post) = &reactions[1] else {
            panic!("expected InsertPost, got {:?}", reactions[1]);
        };
        assert_eq!((post.id, post.created), (31, 500));
        assert_eq!(post.author_name, "ann");
        assert_eq!(post.content, "hello");
        assert_eq!(reactions[2..], [Reaction::ClearDraft, Reaction::NewChallenge(Some("c4".into()))]);
        assert_eq!(api.count(Endpoint::Posts), 0);
    }

    #[tokio::test]
    async fn test_created_without_id_refetches_posts() {
        let api = MockApi::new();
        api.respond(Endpoint::NewPost, json!({}));
        api.respond(Endpoint::Posts, json!({ "a": { "id": 1, "created": 5 } }));
        api.respond(Endpoint::Captcha, json!({ "captcha": "c5" }));

        let reactions = create_post(&api, &session(), &Language::default(), 7, &draft()).await;
        assert!(reactions.contains(&Reaction::ReplacePosts(vec![Post {
            id: 1,
            created: 5,
            ..Default::default()
        }])));
    }

    #[tokio::test]
    async fn test_delete_thread_navigates_to_board() {
        let api = MockApi::new();
        api.respond(Endpoint::DeleteThread, json!({ "done": true }));
        let lang = Language::default();

        let reactions = delete_thread(&api, &session(), &lang, &thread()).await;
        assert_eq!(
            reactions,
            vec![Reaction::Notify("Thread deleted".into()), Reaction::Navigate(Route::Board(2))]
        );
        assert_eq!(
            api.calls(),
            vec![(Endpoint::DeleteThread, json!({ "username": "ann", "password": "pw", "threadID": 7 }))]
        );
    }

    #[tokio::test]
    async fn test_delete_thread_refused_shows_error() {
        let api = MockApi::new();
        api.respond(Endpoint::DeleteThread, json!({ "done": false, "error": "403" }));
        api.respond(Endpoint::DeleteThread, json!({ "done": false }));
        let lang = Language::default();

        assert_eq!(
            delete_thread(&api, &session(), &lang, &thread()).await,
            vec![Reaction::Notify("403".into())]
        );
        assert!(delete_thread(&api, &session(), &lang, &thread()).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_post_refetches_list() {
        let api = MockApi::new();
        api.respond(Endpoint::DeletePost, json!({ "done": true }));
        api.respond(Endpoint::Posts, json!({ "b": { "id": 2, "created": 9 } }));

        let reactions = delete_post(&api, &session(), &Language::default(), 7, 1).await;
        assert_eq!(
            reactions,
            vec![
                Reaction::ReplacePosts(vec![Post { id: 2, created: 9, ..Default::default() }]),
                Reaction::Notify("Post deleted".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        let api = MockApi::new();
        api.fail(Endpoint::DeletePost, ApiError::Status(500));

        let lang = Language::default();
        let reactions = delete_post(&api, &session(), &lang, 7, 1).await;
        assert_eq!(reactions, vec![Reaction::Notify(lang.text("requestFailed"))]);
    }

    #[tokio::test]
    async fn test_challenge_failure_clears_challenge() {
        let api = MockApi::new();
        assert_eq!(request_challenge(&api).await, Reaction::NewChallenge(None));
    }
}
