//! Todo Entity
//!
//! A row of the `todos` collection. Identifiers and creation timestamps are
//! assigned by storage, never by the client.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;

/// A todo item as stored remotely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned identifier
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Storage-assigned creation time
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Todo {
    type Id = i64;
    const TABLE: &'static str = "todos";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Insert payload for a new todo
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub completed: bool,
}

impl<'a> NewTodo<'a> {
    /// New todos always start incomplete
    pub fn new(title: &'a str) -> Self {
        Self { title, completed: false }
    }
}

/// Update payload for the completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    pub completed: bool,
}

impl TodoPatch {
    /// Patch that flips the given current flag
    pub fn toggled(current: bool) -> Self {
        Self { completed: !current }
    }
}

/// Accepts `timestamptz` (RFC 3339 with offset) and plain `timestamp` columns.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(serde::de::Error::custom)
}
