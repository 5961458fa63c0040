//! Import backup use case
//!
//! The import pipeline is split into prepare (read, parse, validate) and
//! apply (overwrite), so the caller can interpose the destructive-overwrite
//! confirmation between the two without the service touching stdin.

use crate::domain::{Collection, JournalEntry};
use crate::error::{MemoirError, Result};
use crate::infrastructure::JournalRepository;
use std::fs;
use std::path::Path;

/// A parsed, validated backup waiting for confirmation.
#[derive(Debug)]
pub struct PendingImport {
    entries: Vec<JournalEntry>,
}

impl PendingImport {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Service for restoring the journal from a backup file
pub struct ImportService<R: JournalRepository> {
    repository: R,
}

impl<R: JournalRepository> ImportService<R> {
    pub fn new(repository: R) -> Self {
        ImportService { repository }
    }

    /// Read and validate a backup file without touching the journal.
    ///
    /// The content must parse as a JSON array; element shape is
    /// deliberately unchecked. Any failure leaves the journal as it was.
    pub fn prepare(&self, path: &Path) -> Result<PendingImport> {
        let text = fs::read_to_string(path)?;

        let collection = Collection::from_json(&text).map_err(MemoirError::InvalidBackup)?;

        Ok(PendingImport {
            entries: collection.into_entries(),
        })
    }

    /// Replace the entire journal with the prepared backup.
    ///
    /// Does not read the existing stored state first: import must work
    /// even when the store is corrupt, since it is the recovery path.
    pub fn apply(&self, pending: PendingImport) -> Result<usize> {
        let mut collection = Collection::new();
        collection.replace_all(pending.entries);

        self.repository.save_entries(&collection)?;
        Ok(collection.len())
    }
}
