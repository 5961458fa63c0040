//! Domain layer - Core journal model

pub mod collection;
pub mod entry;
pub mod theme;

pub use collection::Collection;
pub use entry::JournalEntry;
pub use theme::Theme;
