//! Integration tests for export and import

use chrono::Local;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_entry, memoir_cmd};

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    memoir_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn stored_entries(temp: &TempDir) -> String {
    fs::read_to_string(temp.path().join(".memoir/journalEntries")).unwrap()
}

#[test]
fn test_export_default_filename() {
    let temp = init_journal();
    add_entry(temp.path(), "exported");

    memoir_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let expected = format!(
        "journal-backup-{}.json",
        Local::now().date_naive().format("%Y-%m-%d")
    );
    assert!(temp.path().join(&expected).exists());
}

#[test]
fn test_export_to_explicit_path_pretty_prints() {
    let temp = init_journal();
    add_entry(temp.path(), "pretty");

    let output = temp.path().join("my-backup.json");
    memoir_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.trim_start().starts_with('['));
    // Pretty-printed: one field per line
    assert!(text.contains("\n  "));
    assert!(text.contains("\"text\": \"pretty\""));
}

#[test]
fn test_export_import_roundtrip() {
    let temp = init_journal();
    add_entry(temp.path(), "first");
    add_entry(temp.path(), "second");
    let before = stored_entries(&temp);

    let backup = temp.path().join("backup.json");
    memoir_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg("--output")
        .arg(&backup)
        .assert()
        .success();

    // Mutate the journal, then restore the backup
    add_entry(temp.path(), "extra");

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries"));

    assert_eq!(stored_entries(&temp), before);
}

#[test]
fn test_import_invalid_json_leaves_journal_unchanged() {
    let temp = init_journal();
    add_entry(temp.path(), "precious");
    let before = stored_entries(&temp);

    let backup = temp.path().join("bad.json");
    fs::write(&backup, "this is not json").unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid backup file"))
        .stderr(predicate::str::contains("left unchanged"));

    assert_eq!(stored_entries(&temp), before);
}

#[test]
fn test_import_non_array_leaves_journal_unchanged() {
    let temp = init_journal();
    add_entry(temp.path(), "precious");
    let before = stored_entries(&temp);

    let backup = temp.path().join("object.json");
    fs::write(&backup, r#"{"a": 1}"#).unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("expected a JSON array"));

    assert_eq!(stored_entries(&temp), before);
}

#[test]
fn test_import_missing_file_fails() {
    let temp = init_journal();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg("does-not-exist.json")
        .arg("--yes")
        .assert()
        .failure();
}

#[test]
fn test_import_prompt_declined_leaves_journal_unchanged() {
    let temp = init_journal();
    add_entry(temp.path(), "precious");
    let before = stored_entries(&temp);

    let backup = temp.path().join("backup.json");
    fs::write(&backup, "[]").unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import cancelled"));

    assert_eq!(stored_entries(&temp), before);
}

#[test]
fn test_import_prompt_no_input_counts_as_decline() {
    let temp = init_journal();
    add_entry(temp.path(), "precious");
    let before = stored_entries(&temp);

    let backup = temp.path().join("backup.json");
    fs::write(&backup, "[]").unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import cancelled"));

    assert_eq!(stored_entries(&temp), before);
}

#[test]
fn test_import_prompt_accepted_overwrites() {
    let temp = init_journal();
    add_entry(temp.path(), "old");

    let backup = temp.path().join("backup.json");
    fs::write(
        &backup,
        r#"[{"id": "r1", "date": "2025-01-17T09:30:00Z", "text": "restored"}]"#,
    )
    .unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Continue?"))
        .stdout(predicate::str::contains("Imported 1 entries"));

    let stored = stored_entries(&temp);
    assert!(stored.contains("restored"));
    assert!(!stored.contains("old"));
}

#[test]
fn test_import_lenient_about_entry_shape() {
    let temp = init_journal();

    let backup = temp.path().join("partial.json");
    fs::write(&backup, r#"[{"text": "no id or date"}]"#).unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 entries"));

    memoir_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no id or date"));
}

#[test]
fn test_import_recovers_corrupt_store() {
    let temp = init_journal();

    // Corrupt the stored entries by hand
    fs::write(temp.path().join(".memoir/journalEntries"), "{broken").unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    let backup = temp.path().join("backup.json");
    fs::write(
        &backup,
        r#"[{"id": "r1", "date": "2025-01-17T09:30:00Z", "text": "rescued"}]"#,
    )
    .unwrap();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .success();

    memoir_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rescued"));
}
