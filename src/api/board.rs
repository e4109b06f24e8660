//! Board Calls
//!
//! Bindings for board metadata and the board's thread list.

use serde::Serialize;

use super::{into_records, Api, ApiError, Endpoint, Records};
use crate::models::{threads_from_records, Board, Thread};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardID")]
    board_id: i64,
}

// ========================
// Calls
// ========================

pub async fn get_board(api: &impl Api, board_id: i64) -> Result<Board, ApiError> {
    api.call(Endpoint::Board, &BoardIdArgs { board_id }).await
}

/// Threads of a board, newest first
pub async fn list_threads(api: &impl Api, board_id: i64) -> Result<Vec<Thread>, ApiError> {
    let records: Option<Records<Thread>> = api.call(Endpoint::Threads, &BoardIdArgs { board_id }).await?;
    Ok(threads_from_records(into_records(records)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_threads_sends_board_id() {
        let api = MockApi::new();
        api.respond(Endpoint::Threads, json!({
            "a": { "id": 5, "created": 100 },
            "b": { "id": 6, "created": 200 }
        }));

        let threads = list_threads(&api, 1).await.unwrap();
        assert_eq!(threads.iter().map(|t| t.id).collect::<Vec<_>>(), vec![6, 5]);
        assert_eq!(api.calls(), vec![(Endpoint::Threads, json!({ "boardID": 1 }))]);
    }

    #[tokio::test]
    async fn test_null_thread_list_is_empty() {
        let api = MockApi::new();
        api.respond(Endpoint::Threads, json!(null));
        assert!(list_threads(&api, 2).await.unwrap().is_empty());
    }
}
