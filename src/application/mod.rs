//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod export;
pub mod import;
pub mod init;
pub mod list_entries;
pub mod theme;

pub use add_entry::AddEntryService;
pub use delete_entry::DeleteEntryService;
pub use export::{default_backup_filename, ExportService};
pub use import::{ImportService, PendingImport};
pub use list_entries::{list_entries, show_entry};
pub use theme::ThemeService;
