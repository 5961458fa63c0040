//! List and show entry use cases

use crate::domain::JournalEntry;
use crate::error::{MemoirError, Result};
use crate::infrastructure::JournalRepository;

/// List entries newest first, with an optional limit.
pub fn list_entries<R: JournalRepository>(
    repository: &R,
    limit: Option<usize>,
) -> Result<Vec<JournalEntry>> {
    let collection = repository.load_entries()?;
    let mut entries = collection.into_entries();

    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}

/// Look up a single entry by id.
pub fn show_entry<R: JournalRepository>(repository: &R, id: &str) -> Result<JournalEntry> {
    let collection = repository.load_entries()?;

    collection
        .find(id)
        .cloned()
        .ok_or_else(|| MemoirError::EntryNotFound(id.to_string()))
}
