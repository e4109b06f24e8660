//! Board page: metadata plus the thread list, newest first.

use crate::api::{self, Api};
use crate::config::AppConfig;
use crate::models::{Board, Thread};
use crate::remote::Remote;

pub async fn load_board(api: &impl Api, board_id: i64) -> Remote<Board> {
    api::get_board(api, board_id).await.into()
}

pub async fn load_threads(api: &impl Api, board_id: i64) -> Remote<Vec<Thread>> {
    api::list_threads(api, board_id).await.into()
}

/// Document title once the board is known
pub fn board_title(config: &AppConfig, board: &Remote<Board>) -> Option<String> {
    board.loaded().map(|b| config.page_title(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::api::{ApiError, Endpoint};
    use serde_json::json;

    #[tokio::test]
    async fn test_board_page() {
        let api = MockApi::new();
        api.respond(Endpoint::Board, json!({ "id": 1, "name": "General", "description": "", "icon": "", "sort": 0 }));
        api.respond(Endpoint::Threads, json!({
            "a": { "id": 5, "created": 100, "name": "older" },
            "b": { "id": 6, "created": 200, "name": "newer" }
        }));
        let config = AppConfig::default();

        let board = load_board(&api, 1).await;
        let threads = load_threads(&api, 1).await;

        assert_eq!(board_title(&config, &board).as_deref(), Some("General - Gorum"));
        let ids: Vec<i64> = threads.loaded().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![6, 5]);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_loading() {
        let api = MockApi::new();
        api.fail(Endpoint::Threads, ApiError::Network("offline".into()));
        api.respond(Endpoint::Board, json!("not a board"));

        let threads = load_threads(&api, 1).await;
        assert!(matches!(threads, Remote::Failed(_)));

        let board = load_board(&api, 1).await;
        assert!(matches!(board, Remote::Failed(_)));
        assert_eq!(board_title(&AppConfig::default(), &board), None);
    }

    #[tokio::test]
    async fn test_thread_order_non_increasing() {
        let api = MockApi::new();
        let records: serde_json::Map<String, serde_json::Value> = [17, 3, 99, 3, 42, 0, 8]
            .iter()
            .enumerate()
            .map(|(i, created)| (format!("k{}", i), json!({ "id": i + 1, "created": created })))
            .collect();
        api.respond(Endpoint::Threads, serde_json::Value::Object(records));

        let threads = load_threads(&api, 4).await;
        let threads = threads.loaded().unwrap();
        assert_eq!(threads.len(), 7);
        assert!(threads.windows(2).all(|w| w[0].created >= w[1].created));
    }
}
