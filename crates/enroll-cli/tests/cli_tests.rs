use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with `--no-color` pointed at a database inside `temp_dir`
fn enroll_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("enroll").expect("Failed to find enroll binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("cli_test.db"));
    cmd
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

const PAGE: &str = r#"{
    "summary": [{ "crn": "10002", "current": "", "available": ["", "DW"] }],
    "catalog": [{ "crn": "10001", "current": "", "available": ["", "RW"] }],
    "addLatency": 1
}"#;

#[test]
fn test_cli_shows_empty_plan_by_default() {
    let temp_dir = TempDir::new().unwrap();

    enroll_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Registration Plan"))
        .stdout(predicate::str::contains("No courses planned."));
}

#[test]
fn test_cli_set_and_show_plan() {
    let temp_dir = TempDir::new().unwrap();

    enroll_cmd(&temp_dir)
        .args(["plan", "set", "10001", "register"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ CRN 10001 planned: Register"));

    enroll_cmd(&temp_dir)
        .args(["plan", "set", "10002", "dw"])
        .assert()
        .success();

    enroll_cmd(&temp_dir)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 10001: Register (RW)"))
        .stdout(predicate::str::contains("2. 10002: Drop (DW)"))
        .stdout(predicate::str::contains("- Auto submit: off"));
}

#[test]
fn test_cli_rejects_unknown_action() {
    let temp_dir = TempDir::new().unwrap();

    enroll_cmd(&temp_dir)
        .args(["plan", "set", "10001", "enroll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_remove_item() {
    let temp_dir = TempDir::new().unwrap();

    enroll_cmd(&temp_dir)
        .args(["plan", "set", "10001", "waitlist"])
        .assert()
        .success();

    enroll_cmd(&temp_dir)
        .args(["plan", "remove", "10001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed CRN 10001"))
        .stdout(predicate::str::contains("No courses planned."));

    enroll_cmd(&temp_dir)
        .args(["plan", "remove", "10001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("10001"));
}

#[test]
fn test_cli_auto_submit_and_clear() {
    let temp_dir = TempDir::new().unwrap();

    enroll_cmd(&temp_dir)
        .args(["plan", "auto-submit", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto submit turned on"));

    enroll_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("- Auto submit: on"));

    enroll_cmd(&temp_dir)
        .args(["plan", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Plan cleared"));

    enroll_cmd(&temp_dir)
        .args(["plan", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ No plan stored"));
}

#[test]
fn test_cli_import_then_export() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(
        temp_dir.path(),
        "plan.json",
        r#"{"items":[{"CRN":"10001","action":"RW"},{"CRN":"10002","action":"WL"}],"autoSubmit":true}"#,
    );

    enroll_cmd(&temp_dir)
        .args(["plan", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 course(s)"));

    let output = enroll_cmd(&temp_dir)
        .args(["plan", "export"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let exported: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(exported["autoSubmit"], true);
    assert_eq!(exported["items"][1]["CRN"], "10002");
    assert_eq!(exported["items"][1]["action"], "WL");
}

#[test]
fn test_cli_import_rejects_malformed_plan() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "plan.json", r#"{"items":[{"CRN":"1"#);

    enroll_cmd(&temp_dir)
        .args(["plan", "import"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid plan record"));
}

#[test]
fn test_cli_run_reconciles_page() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_file(temp_dir.path(), "page.json", PAGE);
    let saved = temp_dir.path().join("after.json");

    enroll_cmd(&temp_dir)
        .args(["plan", "set", "10001", "register"])
        .assert()
        .success();
    enroll_cmd(&temp_dir)
        .args(["plan", "set", "10002", "drop"])
        .assert()
        .success();
    enroll_cmd(&temp_dir)
        .args(["plan", "auto-submit", "true"])
        .assert()
        .success();

    enroll_cmd(&temp_dir)
        .args(["run", "--interval-ms", "1", "--trace", "--page"])
        .arg(&page)
        .arg("--save-page")
        .arg(&saved)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Run Report"))
        .stdout(predicate::str::contains("- Added to summary: 10001"))
        .stdout(predicate::str::contains("- Changed: 2 of 2"))
        .stdout(predicate::str::contains("- Submitted: yes"))
        .stdout(predicate::str::contains("click #addCRNbutton"))
        .stdout(predicate::str::contains("click #saveButton"));

    let after: serde_json::Value = serde_json::from_str(&fs::read_to_string(saved).unwrap()).unwrap();
    let summary = after["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0]["current"], "DW");
    assert_eq!(summary[1]["crn"], "10001");
    assert_eq!(summary[1]["current"], "RW");
}

#[test]
fn test_cli_run_fails_when_added_crn_never_appears() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_file(temp_dir.path(), "page.json", PAGE);

    enroll_cmd(&temp_dir)
        .args(["plan", "set", "10003", "register"])
        .assert()
        .success();

    enroll_cmd(&temp_dir)
        .args(["run", "--attempts", "3", "--interval-ms", "1", "--page"])
        .arg(&page)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run failed"))
        .stderr(predicate::str::contains(
            "Still missing items in summary after waiting: 10003",
        ));
}

#[test]
fn test_cli_run_rejects_missing_fixture() {
    let temp_dir = TempDir::new().unwrap();

    enroll_cmd(&temp_dir)
        .args(["run", "--page"])
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load page fixture"));
}
