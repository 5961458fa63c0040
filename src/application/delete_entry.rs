//! Delete entry use case

use crate::error::Result;
use crate::infrastructure::JournalRepository;

/// Service for deleting journal entries
pub struct DeleteEntryService<R: JournalRepository> {
    repository: R,
}

impl<R: JournalRepository> DeleteEntryService<R> {
    pub fn new(repository: R) -> Self {
        DeleteEntryService { repository }
    }

    /// Delete the entry with the given id. Returns whether an entry was
    /// removed; an absent id is a no-op, not an error.
    pub fn execute(&self, id: &str) -> Result<bool> {
        let mut collection = self.repository.load_entries()?;

        if !collection.delete(id) {
            return Ok(false);
        }

        self.repository.save_entries(&collection)?;
        Ok(true)
    }
}
