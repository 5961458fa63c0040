//! Journal persistence

use crate::domain::{Collection, Theme};
use crate::error::{MemoirError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Store key holding the serialized entry collection.
pub const ENTRIES_KEY: &str = "journalEntries";

/// Store key holding the theme preference.
pub const THEME_KEY: &str = "journalTheme";

/// Abstract repository for journal state.
///
/// State transitions live in the domain; this trait only loads and saves
/// whole values, so an in-memory implementation can stand in for the file
/// system in tests.
pub trait JournalRepository {
    /// Load the full entry collection. An absent store key yields an
    /// empty collection.
    fn load_entries(&self) -> Result<Collection>;

    /// Persist the full serialized collection.
    fn save_entries(&self, collection: &Collection) -> Result<()>;

    /// Load the theme preference, defaulting to light when the key is
    /// absent or holds an unrecognized value.
    fn load_theme(&self) -> Result<Theme>;

    /// Persist the theme preference.
    fn save_theme(&self, theme: Theme) -> Result<()>;
}

impl<T: JournalRepository + ?Sized> JournalRepository for &T {
    fn load_entries(&self) -> Result<Collection> {
        (**self).load_entries()
    }

    fn save_entries(&self, collection: &Collection) -> Result<()> {
        (**self).save_entries(collection)
    }

    fn load_theme(&self) -> Result<Theme> {
        (**self).load_theme()
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        (**self).save_theme(theme)
    }
}

/// File system implementation of [`JournalRepository`].
///
/// Each store key maps to one file under `<root>/.memoir/`.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory.
    /// First checks MEMOIR_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MEMOIR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_memoir_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MemoirError::Storage(format!(
                    "MEMOIR_ROOT is set to '{}' but no .memoir directory found. \
                    Run 'memoir init' in that directory or unset MEMOIR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_memoir_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MemoirError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if .memoir directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_memoir_dir(&self.root)
    }

    /// Create the .memoir store directory
    pub fn initialize(&self) -> Result<()> {
        let memoir_dir = self.memoir_dir();

        if memoir_dir.exists() {
            return Err(MemoirError::Storage(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&memoir_dir)?;
        Ok(())
    }

    fn has_memoir_dir(path: &Path) -> bool {
        path.join(".memoir").is_dir()
    }

    fn memoir_dir(&self) -> PathBuf {
        self.root.join(".memoir")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.memoir_dir().join(key)
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path).map(Some).map_err(MemoirError::Io)
    }

    fn write_key(&self, key: &str, value: &str) -> Result<()> {
        let memoir_dir = self.memoir_dir();
        if !memoir_dir.exists() {
            return Err(MemoirError::NotJournalDirectory(self.root.clone()));
        }

        fs::write(self.key_path(key), value).map_err(MemoirError::Io)
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_entries(&self) -> Result<Collection> {
        match self.read_key(ENTRIES_KEY)? {
            Some(text) => Collection::from_json(&text).map_err(|msg| {
                MemoirError::Storage(format!("stored entries are corrupt: {}", msg))
            }),
            None => Ok(Collection::new()),
        }
    }

    fn save_entries(&self, collection: &Collection) -> Result<()> {
        let text = collection
            .to_json()
            .map_err(|e| MemoirError::Storage(format!("failed to serialize entries: {}", e)))?;
        self.write_key(ENTRIES_KEY, &text)
    }

    fn load_theme(&self) -> Result<Theme> {
        match self.read_key(THEME_KEY)? {
            // Unrecognized stored values fall back to the default, same
            // as an absent key.
            Some(text) => Ok(Theme::from_str(&text).unwrap_or_default()),
            None => Ok(Theme::default()),
        }
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        self.write_key(THEME_KEY, theme.as_str())
    }
}
