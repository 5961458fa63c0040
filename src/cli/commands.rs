//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memoir")]
#[command(about = "Personal journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a journal entry
    Add {
        /// Entry text (empty string permitted)
        text: String,
    },

    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single entry in full
    Show {
        /// Entry id as printed by 'memoir list'
        id: String,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id as printed by 'memoir list'
        id: String,
    },

    /// Show or toggle the light/dark theme
    Theme {
        /// Flip the theme and persist the new value
        #[arg(short, long)]
        toggle: bool,
    },

    /// Export the journal to a JSON backup file
    Export {
        /// Output path (default: journal-backup-<YYYY-MM-DD>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the journal with entries from a JSON backup file
    Import {
        /// Backup file to import
        file: PathBuf,

        /// Overwrite without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
