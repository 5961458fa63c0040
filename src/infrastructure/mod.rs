//! Infrastructure layer - Persistence

pub mod memory;
pub mod repository;

pub use memory::InMemoryRepository;
pub use repository::{FileSystemRepository, JournalRepository, ENTRIES_KEY, THEME_KEY};
