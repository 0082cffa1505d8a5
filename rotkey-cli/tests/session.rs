#![allow(missing_docs)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_session_reports_golden_trace() {
    // 1. Run a session with the default key 't' against a temp log file
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    Command::cargo_bin("rotkey-cli")
        .expect("Failed to find rotkey-cli binary")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hex = 61 62 63"))
        .stdout(predicate::str::contains("Hex = 58 4c d8"));

    // 2. The same report must have been appended to the log
    let log_content = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(log_content.contains("Encrypted string =    XL. Hex = 58 4c d8"));
}

#[test]
fn test_decrypted_string_matches_original() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    Command::cargo_bin("rotkey-cli")
        .expect("Failed to find rotkey-cli binary")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("Zq9!x\n")
        .assert()
        .success();

    // Original and decrypted hex dumps are identical, so the dump of the
    // input appears twice in the report.
    let log_content = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert_eq!(log_content.matches("Hex = 5a 71 39 21 78").count(), 2);
}

#[test]
fn test_log_file_is_append_only() {
    // 1. Run two sessions against the same log file
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    for text in ["abc\n", "def\n"] {
        Command::cargo_bin("rotkey-cli")
            .expect("Failed to find rotkey-cli binary")
            .arg("--log-file")
            .arg(&log_path)
            .write_stdin(text)
            .assert()
            .success();
    }

    // 2. Both entries survive, each with its own header and separator
    let log_content = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert_eq!(log_content.matches("Date: ").count(), 2);
    assert_eq!(log_content.matches("----").count(), 2);
    assert!(log_content.contains("Hex = 61 62 63"));
    assert!(log_content.contains("Hex = 64 65 66"));
}

#[test]
fn test_input_is_truncated_at_capacity() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    Command::cargo_bin("rotkey-cli")
        .expect("Failed to find rotkey-cli binary")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("abcdefgh\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hex = 61 62 63 64 65 66"))
        .stdout(predicate::str::contains("67").not());
}

#[test]
fn test_dollar_terminates_input_early() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    Command::cargo_bin("rotkey-cli")
        .expect("Failed to find rotkey-cli binary")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("ab$cd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original string  =     ab Hex = 61 62"));
}

#[test]
fn test_empty_input_produces_empty_report_lines() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    Command::cargo_bin("rotkey-cli")
        .expect("Failed to find rotkey-cli binary")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original string  =        Hex = "));

    assert!(log_path.exists(), "Log file should exist even for empty input");
}

#[test]
fn test_custom_key_changes_the_ciphertext() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    Command::cargo_bin("rotkey-cli")
        .expect("Failed to find rotkey-cli binary")
        .arg("--key")
        .arg("K")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encryption Key: 'K' (0x4b)"))
        .stdout(predicate::str::contains("Hex = 58 4c d8").not());

    // Still a round trip under the new key.
    let log_content = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert_eq!(log_content.matches("Hex = 61 62 63").count(), 2);
}

#[test]
fn test_non_ascii_key_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("log.txt");

    Command::cargo_bin("rotkey-cli")
        .expect("Failed to find rotkey-cli binary")
        .arg("--key")
        .arg("é")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("abc\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ASCII"));

    assert!(!log_path.exists(), "No log entry should be written on failure");
}
