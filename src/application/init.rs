//! Initialize journal use case

use crate::domain::{Collection, Theme};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
///
/// Creates the `.memoir` store directory and seeds it with an empty entry
/// collection and the default theme.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;
    repo.save_entries(&Collection::new())?;
    repo.save_theme(Theme::default())?;

    println!("Initialized memoir journal at {}", path.display());

    Ok(())
}
