//! Add entry use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::JournalRepository;

/// Service for adding journal entries
pub struct AddEntryService<R: JournalRepository> {
    repository: R,
}

impl<R: JournalRepository> AddEntryService<R> {
    pub fn new(repository: R) -> Self {
        AddEntryService { repository }
    }

    /// Prepend a new entry with the given text and persist the collection.
    /// Empty text is permitted; no validation is applied.
    pub fn execute(&self, text: &str) -> Result<JournalEntry> {
        let mut collection = self.repository.load_entries()?;
        let entry = collection.add(text).clone();
        self.repository.save_entries(&collection)?;
        Ok(entry)
    }
}
