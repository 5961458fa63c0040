//! Output formatting and prompting utilities

use crate::domain::JournalEntry;
use chrono::DateTime;
use std::io::{self, BufRead, Write};

const SNIPPET_WIDTH: usize = 60;

/// Format a list of entries for display, one line per entry:
/// timestamp, id, first line of the text.
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No journal entries".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  {}\n",
            display_date(&entry.date),
            entry.id,
            snippet(&entry.text)
        ));
    }
    output
}

/// Format a single entry in full.
pub fn format_entry(entry: &JournalEntry) -> String {
    format!(
        "Id:    {}\nDate:  {}\n\n{}\n",
        entry.id,
        display_date(&entry.date),
        entry.text
    )
}

/// Ask a yes/no question on stdout and read the answer from stdin.
/// Anything other than y/yes (including end of input) counts as no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Render an RFC 3339 timestamp for display. Entries restored from a
/// hand-edited backup may carry arbitrary date strings; those are shown
/// as-is.
fn display_date(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => parsed.format("%d-%m-%Y %H:%M").to_string(),
        Err(_) => date.to_string(),
    }
}

fn snippet(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");

    let mut snippet: String = first_line.chars().take(SNIPPET_WIDTH).collect();
    if first_line.chars().count() > SNIPPET_WIDTH || text.lines().count() > 1 {
        snippet.push_str("...");
    }
    snippet
}
