//! Export backup use case

use crate::error::{MemoirError, Result};
use crate::infrastructure::JournalRepository;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backup filename for the given date.
pub fn default_backup_filename(date: NaiveDate) -> String {
    format!("journal-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Service for exporting the journal to a backup file
pub struct ExportService<R: JournalRepository> {
    repository: R,
}

impl<R: JournalRepository> ExportService<R> {
    pub fn new(repository: R) -> Self {
        ExportService { repository }
    }

    /// Write the full collection as pretty-printed JSON to `output`, or to
    /// `journal-backup-<YYYY-MM-DD>.json` in the working directory when no
    /// path is given. Returns the written path and the entry count.
    pub fn execute(&self, output: Option<&Path>) -> Result<(PathBuf, usize)> {
        let collection = self.repository.load_entries()?;

        let json = collection
            .to_json_pretty()
            .map_err(|e| MemoirError::Storage(format!("failed to serialize entries: {}", e)))?;

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(default_backup_filename(
                chrono::Local::now().date_naive(),
            )),
        };

        fs::write(&path, json)?;

        Ok((path, collection.len()))
    }
}
