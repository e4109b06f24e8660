//! Frontend Models
//!
//! Display projections of server records. The server owns every record; lists
//! are fully replaced on each fetch.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Board metadata (matches `board` endpoint)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub sort: i64,
}

/// Thread record (matches `thread` and `threads` endpoints)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thread {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub name: String,
    /// Owning board id
    #[serde(deserialize_with = "lenient_i64")]
    pub board: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub author: i64,
    /// Unix seconds
    #[serde(deserialize_with = "lenient_i64")]
    pub created: i64,
    pub content: String,
    pub author_name: String,
    pub author_avatar: String,
}

/// Post record (matches `posts` endpoint)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub author: i64,
    pub author_name: String,
    pub author_avatar: String,
    pub content: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub created: i64,
}

impl Post {
    /// The API uses ids below 1 as placeholders
    pub fn is_valid(&self) -> bool {
        self.id >= 1
    }
}

/// User record; `data` holds the whole record as sent by the server
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: i64,
    pub data: Map<String, Value>,
}

impl User {
    pub fn from_record(data: Map<String, Value>) -> Self {
        let id = data.get("id").map(value_as_i64).unwrap_or_default();
        Self { id, data }
    }

    pub fn username(&self) -> &str {
        self.data.get("username").and_then(Value::as_str).unwrap_or("")
    }

    pub fn avatar(&self) -> &str {
        self.data.get("avatar").and_then(Value::as_str).unwrap_or("")
    }
}

/// Auxiliary profile fields (e.g. `website`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserData {
    pub fields: BTreeMap<String, String>,
}

impl UserData {
    /// Keep string and number values; nulls mean "not set"
    pub fn from_record(record: Map<String, Value>) -> Self {
        let fields = record
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(s) => Some((name, s)),
                Value::Number(n) => Some((name, n.to_string())),
                Value::Bool(b) => Some((name, b.to_string())),
                _ => None,
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Thread list as shown on a board: newest first
pub fn threads_from_records(records: BTreeMap<String, Thread>) -> Vec<Thread> {
    let mut threads: Vec<Thread> = records.into_values().collect();
    threads.sort_by(|a, b| b.created.cmp(&a.created));
    threads
}

/// Post list as shown in a thread: placeholders dropped, oldest first
pub fn posts_from_records(records: BTreeMap<String, Post>) -> Vec<Post> {
    let mut posts: Vec<Post> = records.into_values().filter(Post::is_valid).collect();
    posts.sort_by_key(|p| p.created);
    posts
}

/// Insert after every post created at or before `post`, replacing a post with the same id
pub fn insert_post_sorted(posts: &mut Vec<Post>, post: Post) {
    if !post.is_valid() {
        return;
    }
    posts.retain(|p| p.id != post.id);
    let at = posts.partition_point(|p| p.created <= post.created);
    posts.insert(at, post);
}

/// Render a unix timestamp for display (UTC)
pub fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn value_as_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

/// Accepts numbers, numeric strings and null
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_i64(&value))
}
