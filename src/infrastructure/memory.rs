//! In-memory repository, for tests and substitution

use crate::domain::{Collection, Theme};
use crate::error::Result;
use crate::infrastructure::JournalRepository;
use std::cell::RefCell;

/// An in-memory [`JournalRepository`].
///
/// Backs the application services in unit tests, where touching the file
/// system would only add noise.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entries: RefCell<Option<Collection>>,
    theme: RefCell<Option<Theme>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        InMemoryRepository::default()
    }
}

impl JournalRepository for InMemoryRepository {
    fn load_entries(&self) -> Result<Collection> {
        Ok(self.entries.borrow().clone().unwrap_or_default())
    }

    fn save_entries(&self, collection: &Collection) -> Result<()> {
        *self.entries.borrow_mut() = Some(collection.clone());
        Ok(())
    }

    fn load_theme(&self) -> Result<Theme> {
        Ok(self.theme.borrow().unwrap_or_default())
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        *self.theme.borrow_mut() = Some(theme);
        Ok(())
    }
}
