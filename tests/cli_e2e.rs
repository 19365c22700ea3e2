//! End-to-end CLI tests for slackpack.
//!
//! These tests run the actual binary against temporary export directories
//! and check exit codes, stdout/stderr, and the written CSV.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a working directory with a `SlackMessages/` export in it.
fn setup_workdir() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let export = dir.path().join("SlackMessages");
    fs::create_dir(&export).unwrap();

    let day1 = r#"[
  {"ts": "1700000000.000000000", "type": "message", "user": "U1", "text": "hello",
   "user_profile": {"name": "alice", "real_name": "Alice A", "display_name": "Al"}},
  {"ts": "1700000060.000100", "type": "message", "user": "U2", "text": "look",
   "attachments": [{"original_url": "https://x.example", "id": 1}, {"original_url": "https://y.example", "id": 2}]}
]"#;
    fs::write(export.join("2023-11-14.json"), day1).unwrap();

    let day2 = r#"[
  {"ts": "notanumber", "type": "message", "user": "U1", "text": "broken"},
  {"ts": "1700086400.000000", "type": "message", "user": "U1", "upload": true,
   "files": [{"id": "F1", "name": "z.png", "url_private_download": "https://files.example/z.png"}]}
]"#;
    fs::write(export.join("2023-11-15.json"), day2).unwrap();

    dir
}

fn slackpack_cmd(dir: &Path) -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_slackpack")));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let work = setup_workdir();

        slackpack_cmd(work.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("slack_records.csv"));

        let content = fs::read_to_string(work.path().join("slack_records.csv")).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines[0],
            "TimeStamp,UserID,UserName,RealName,MessageType,Text,Attachments,Files"
        );
        assert_eq!(lines[1], "2023-11-14T22:13:20Z,U1,alice,Alice A,message,hello,,");
        assert_eq!(
            lines[2],
            "2023-11-14T22:14:20Z,U2,,,message,look,\"https://x.example,https://y.example\","
        );
        assert_eq!(
            lines[3],
            "2023-11-15T22:13:20Z,U1,,,message,,,https://files.example/z.png"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_custom_paths() {
        let work = setup_workdir();
        let output = work.path().join("custom.csv");

        slackpack_cmd(work.path())
            .args(["-i", "SlackMessages", "-o", output.to_str().unwrap()])
            .assert()
            .success();

        assert!(output.exists());
        assert!(!work.path().join("slack_records.csv").exists());
    }

    #[test]
    fn test_quiet_has_empty_stdout() {
        let work = setup_workdir();

        slackpack_cmd(work.path())
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_subsec_decimal_fraction() {
        let work = setup_workdir();

        slackpack_cmd(work.path())
            .args(["--decimal-fraction", "--subsec", "-q"])
            .assert()
            .success();

        let content = fs::read_to_string(work.path().join("slack_records.csv")).unwrap();
        assert!(content.contains("2023-11-14T22:14:20.000100Z,U2"));
    }

    #[test]
    fn test_rerun_is_identical() {
        let work = setup_workdir();
        let output = work.path().join("slack_records.csv");

        slackpack_cmd(work.path()).arg("-q").assert().success();
        let first = fs::read(&output).unwrap();
        slackpack_cmd(work.path()).arg("-q").assert().success();
        assert_eq!(first, fs::read(&output).unwrap());
    }
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

mod diagnostics {
    use super::*;

    #[test]
    fn test_bad_timestamp_logged_to_stderr() {
        let work = setup_workdir();

        slackpack_cmd(work.path())
            .arg("-q")
            .assert()
            .success()
            .stderr(predicate::str::contains("notanumber"))
            .stderr(predicate::str::contains("2023-11-15.json"));
    }

    #[test]
    fn test_broken_document_does_not_fail_run() {
        let work = setup_workdir();
        fs::write(work.path().join("SlackMessages").join("2023-11-16.json"), "{oops").unwrap();

        slackpack_cmd(work.path())
            .arg("-q")
            .assert()
            .success()
            .stderr(predicate::str::contains("2023-11-16.json"));

        let content = fs::read_to_string(work.path().join("slack_records.csv")).unwrap();
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_summary_reports_skips() {
        let work = setup_workdir();

        slackpack_cmd(work.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("2 found, 2 decoded, 0 skipped"))
            .stdout(predicate::str::contains("Skipped:   1"));
    }
}

// ============================================================================
// Exit Code Tests
// ============================================================================

mod exit_codes {
    use super::*;

    #[test]
    fn test_empty_export_succeeds_with_header_only() {
        let work = tempdir().unwrap();
        fs::create_dir(work.path().join("SlackMessages")).unwrap();

        slackpack_cmd(work.path()).arg("-q").assert().success();

        let content = fs::read_to_string(work.path().join("slack_records.csv")).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_missing_input_dir_fails() {
        let work = tempdir().unwrap();

        slackpack_cmd(work.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("SlackMessages"));

        assert!(!work.path().join("slack_records.csv").exists());
    }

    #[test]
    fn test_unwritable_output_fails() {
        let work = setup_workdir();

        slackpack_cmd(work.path())
            .args(["-o", "missing_dir/out.csv"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Cannot write output"));
    }

    #[test]
    fn test_all_documents_broken_fails() {
        let work = tempdir().unwrap();
        let export = work.path().join("SlackMessages");
        fs::create_dir(&export).unwrap();
        fs::write(export.join("a.json"), "not json").unwrap();

        slackpack_cmd(work.path())
            .arg("-q")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("no rows could be extracted"));

        // header-only extract is still produced
        let content = fs::read_to_string(work.path().join("slack_records.csv")).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_all_timestamps_malformed_fails() {
        let work = tempdir().unwrap();
        let export = work.path().join("SlackMessages");
        fs::create_dir(&export).unwrap();
        fs::write(export.join("a.json"), r#"[{"ts":"notanumber"},{"ts":"bad"}]"#).unwrap();

        slackpack_cmd(work.path())
            .arg("-q")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("no rows could be extracted"));

        let content = fs::read_to_string(work.path().join("slack_records.csv")).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_empty_array_document_succeeds() {
        let work = tempdir().unwrap();
        let export = work.path().join("SlackMessages");
        fs::create_dir(&export).unwrap();
        fs::write(export.join("a.json"), "[]").unwrap();

        slackpack_cmd(work.path()).arg("-q").assert().success();
    }

    #[test]
    fn test_unknown_argument_fails() {
        let work = setup_workdir();

        slackpack_cmd(work.path())
            .arg("--no-such-flag")
            .assert()
            .failure();
    }
}
