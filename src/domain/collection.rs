//! Ordered entry collection and its JSON encoding

use crate::domain::JournalEntry;
use serde_json::Value;

/// The ordered set of all journal entries, newest first.
///
/// New entries are prepended, so storage order is display order. The
/// collection is serialized as a plain JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<JournalEntry>,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    /// Create an entry from `text` and prepend it. Returns the new entry.
    pub fn add(&mut self, text: &str) -> &JournalEntry {
        let entry = JournalEntry::new(text);
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    /// Remove the entry with the given id. Returns false (without
    /// modifying anything) when no entry matches.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Wholesale overwrite of the collection. Used only by import.
    pub fn replace_all(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
    }

    pub fn find(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<JournalEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a collection from JSON text.
    ///
    /// The only shape requirement is that the top-level value is an array;
    /// elements are decoded leniently (see [`JournalEntry::from_value`]).
    /// The error is a plain message so callers can wrap it in the variant
    /// that fits the operation (corrupt store vs. invalid backup).
    pub fn from_json(text: &str) -> Result<Self, String> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| format!("not valid JSON: {}", e))?;

        let Value::Array(items) = value else {
            return Err(format!(
                "expected a JSON array of entries, found {}",
                json_type_name(&value)
            ));
        };

        let entries = items.iter().map(JournalEntry::from_value).collect();
        Ok(Collection { entries })
    }

    /// Compact encoding, used for the persistent store.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    /// Pretty-printed encoding, used for backup files.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
