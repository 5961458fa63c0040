//! memoir - Personal journal for the terminal
//!
//! A command-line journaling application that keeps free-text entries in a
//! local key-value store, with a light/dark theme preference and JSON
//! backup export/import.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MemoirError;
