//! Journal entry record

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One journal record: an opaque id, a creation timestamp, and free text.
///
/// Entries are immutable once created; the collection replaces or removes
/// them as a whole, never edits them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub text: String,
}

impl JournalEntry {
    /// Create a new entry with a fresh unique id and the current UTC timestamp.
    pub fn new(text: &str) -> Self {
        JournalEntry {
            id: Uuid::new_v4().to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            text: text.to_string(),
        }
    }

    /// Decode an entry from an arbitrary JSON value, leniently.
    ///
    /// Backups are validated for array shape only, so individual elements
    /// may be missing fields or not be objects at all. Missing or
    /// non-string fields become empty strings.
    pub fn from_value(value: &Value) -> Self {
        JournalEntry {
            id: string_field(value, "id"),
            date: string_field(value, "date"),
            text: string_field(value, "text"),
        }
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
