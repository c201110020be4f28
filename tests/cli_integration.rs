use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn stockz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockz").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_from_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockz(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: inventory.json not found, starting with empty inventory.",
        ))
        .stdout(predicate::str::contains(
            "Warning: Cannot add zero or negative quantity (-2) for banana. Skipping.",
        ))
        .stdout(predicate::str::contains(
            "Error: Invalid types for item (integer) or qty (string). Skipping.",
        ))
        .stdout(predicate::str::contains(
            "Warning: Item 'orange' not found, cannot remove.",
        ))
        .stdout(predicate::str::contains("Apple stock: 7"))
        .stdout(predicate::str::contains("Low items: []"))
        .stdout(predicate::str::contains(
            "--- Items Report ---\napple -> 7\n--------------------",
        ));

    let saved = fs::read_to_string(temp_dir.path().join("inventory.json")).unwrap();
    assert_eq!(saved, "{\n    \"apple\": 7\n}");
}

#[test]
fn test_demo_accumulates_across_runs() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockz(temp_dir.path()).arg("demo").assert().success();
    stockz(temp_dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple stock: 14"))
        .stdout(predicate::str::contains("not found, starting with empty").not());
}

#[test]
fn test_add_then_qty() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockz(temp_dir.path())
        .args(["--file", "stock.json", "add", "apple", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 10 of apple"));

    stockz(temp_dir.path())
        .args(["--file", "stock.json", "qty", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("10\n"));

    stockz(temp_dir.path())
        .args(["--file", "stock.json", "qty", "pear"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("0\n"));
}

#[test]
fn test_non_integer_quantity_is_skipped() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockz(temp_dir.path())
        .args(["add", "apple", "ten"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid types"));

    assert!(!temp_dir.path().join("inventory.json").exists());
}

#[test]
fn test_remove_to_zero_deletes_entry() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("inventory.json");
    fs::write(&data, r#"{"apple": 7, "banana": 3}"#).unwrap();

    stockz(temp_dir.path())
        .args(["remove", "banana", "5"])
        .assert()
        .success();

    let saved = fs::read_to_string(&data).unwrap();
    assert_eq!(saved, "{\n    \"apple\": 7\n}");
}

#[test]
fn test_corrupt_file_reports_error_and_continues() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("inventory.json"), "{not json").unwrap();

    stockz(temp_dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Could not decode inventory.json. File might be corrupt.",
        ))
        .stdout(predicate::str::contains(
            "--- Items Report ---\n--------------------",
        ));
}

#[test]
fn test_low_uses_configured_threshold() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("inventory.json"),
        r#"{"apple": 10, "banana": 3}"#,
    )
    .unwrap();

    stockz(temp_dir.path())
        .arg("low")
        .assert()
        .success()
        .stdout("banana\n");

    stockz(temp_dir.path())
        .args(["config", "low-threshold", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low-threshold set to 11"));

    stockz(temp_dir.path())
        .arg("low")
        .assert()
        .success()
        .stdout("apple\nbanana\n");
}

#[test]
fn test_unwritable_data_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("missing-dir").join("inventory.json");

    stockz(temp_dir.path())
        .arg("--file")
        .arg(&data)
        .args(["add", "apple", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"));
}
