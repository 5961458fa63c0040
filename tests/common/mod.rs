use assert_cmd::Command;

pub fn memoir_cmd() -> Command {
    let mut cmd = Command::cargo_bin("memoir").unwrap();
    cmd.env_remove("MEMOIR_ROOT");
    cmd
}

/// Run `memoir add` and return the id printed for the new entry.
#[allow(dead_code)]
pub fn add_entry(dir: &std::path::Path, text: &str) -> String {
    let assert = memoir_cmd()
        .current_dir(dir)
        .arg("add")
        .arg(text)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    stdout
        .trim()
        .strip_prefix("Added entry ")
        .expect("unexpected add output")
        .to_string()
}
