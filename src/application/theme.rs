//! Theme use case

use crate::domain::Theme;
use crate::error::Result;
use crate::infrastructure::JournalRepository;

/// Service for reading and toggling the theme preference
pub struct ThemeService<R: JournalRepository> {
    repository: R,
}

impl<R: JournalRepository> ThemeService<R> {
    pub fn new(repository: R) -> Self {
        ThemeService { repository }
    }

    /// The currently persisted theme, defaulting to light.
    pub fn current(&self) -> Result<Theme> {
        self.repository.load_theme()
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.repository.load_theme()?.toggle();
        self.repository.save_theme(next)?;
        Ok(next)
    }
}
