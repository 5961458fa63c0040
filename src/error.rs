//! Error types for memoir

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the memoir application
#[derive(Debug, Error)]
pub enum MemoirError {
    #[error("Not a memoir journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("No entry found with id: {0}")]
    EntryNotFound(String),

    #[error("Invalid backup file: {0}")]
    InvalidBackup(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MemoirError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MemoirError::NotJournalDirectory(_) => 2,
            MemoirError::EntryNotFound(_) => 3,
            MemoirError::InvalidBackup(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MemoirError::NotJournalDirectory(path) => {
                format!(
                    "Not a memoir journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'memoir init' in this directory to create a new journal\n\
                    • Navigate to an existing memoir directory\n\
                    • Set MEMOIR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MemoirError::EntryNotFound(id) => {
                format!(
                    "No entry found with id: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'memoir list' to see entry ids\n\
                    • Ids must be given in full, as shown by 'memoir list'",
                    id
                )
            }
            MemoirError::InvalidBackup(msg) => {
                format!(
                    "Invalid backup file: {}\n\n\
                    Your journal was left unchanged.\n\n\
                    Suggestions:\n\
                    • A backup must be a JSON array, as produced by 'memoir export'\n\
                    • Check that you selected the right file",
                    msg
                )
            }
            MemoirError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    Suggestions:\n\
                    • The stored journal may be corrupt; restore it with 'memoir import'\n\
                    • Check the files under the .memoir directory",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MemoirError
pub type Result<T> = std::result::Result<T, MemoirError>;
