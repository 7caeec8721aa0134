use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use std::thread;
use std::time::Duration;

fn jobtrack(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jobtrack").unwrap();
    cmd.env("JOBTRACK_HOME", home);
    cmd
}

/// A running `jobtrack shell` with piped stdin and stdout, for sessions
/// where commands have to arrive with real delays between them.
fn shell_session(home: &Path) -> std::process::Child {
    let mut cmd = std::process::Command::cargo_bin("jobtrack").unwrap();
    cmd.env("JOBTRACK_HOME", home)
        .arg("shell")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped());
    cmd.spawn().unwrap()
}

#[test]
fn test_add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Backend Engineer", "--date", "2025-05-10"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Application added: Acme"));

    jobtrack(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Acme"))
        .stdout(predicates::str::contains("Backend Engineer"))
        .stdout(predicates::str::contains("Applied"));
}

#[test]
fn test_list_empty_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No applications found."));
}

#[test]
fn test_delete_persists_across_processes() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev"])
        .assert()
        .success();

    jobtrack(temp_dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Application deleted (1): Acme"));

    // The deletion was written through; a new process sees it gone.
    jobtrack(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Acme").not());
}

#[test]
fn test_delete_confirmation_requires_exact_y() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev"])
        .assert()
        .success();

    // Anything but an exact "Y" cancels, lowercase included.
    jobtrack(temp_dir.path())
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Operation cancelled."));

    jobtrack(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Acme"));

    jobtrack(temp_dir.path())
        .args(["delete", "1"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Application deleted (1): Acme"));
}

#[test]
fn test_undo_window_dies_with_the_process() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev"])
        .assert()
        .success();

    jobtrack(temp_dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success();

    // A fresh process has no pending undo: the slot is in-memory only.
    jobtrack(temp_dir.path())
        .arg("undo")
        .assert()
        .success()
        .stdout(predicates::str::contains("Nothing to undo."));

    jobtrack(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Acme").not());
}

#[test]
fn test_shell_delete_then_undo_restores() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev", "--date", "2025-05-10"])
        .assert()
        .success();
    jobtrack(temp_dir.path())
        .args(["add", "Globex", "SRE", "--date", "2025-05-03"])
        .assert()
        .success();

    jobtrack(temp_dir.path())
        .arg("shell")
        .write_stdin("list\ndelete 1\nundo\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Application deleted (1): Acme"))
        .stdout(predicates::str::contains("type 'undo' within"))
        .stdout(predicates::str::contains("Application restored: Acme"));

    // Restored record survives the session.
    jobtrack(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Acme"))
        .stdout(predicates::str::contains("Globex"));
}

#[test]
fn test_shell_undo_after_expiry_is_too_late() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev", "--date", "2025-05-10"])
        .assert()
        .success();
    jobtrack(temp_dir.path())
        .args(["config", "undo-window-secs", "1"])
        .assert()
        .success();

    let mut child = shell_session(temp_dir.path());
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"delete 1\n").unwrap();
    stdin.flush().unwrap();
    // Let the one-second window lapse while the prompt sits idle.
    thread::sleep(Duration::from_millis(2000));
    stdin.write_all(b"undo\n").unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Application deleted (1): Acme"));
    assert!(stdout.contains("Too late, the undo window has closed."));

    // The deletion stuck.
    jobtrack(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No applications found."));
}

#[test]
fn test_shell_reports_expiry_at_the_next_prompt() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev", "--date", "2025-05-10"])
        .assert()
        .success();
    jobtrack(temp_dir.path())
        .args(["config", "undo-window-secs", "1"])
        .assert()
        .success();

    let mut child = shell_session(temp_dir.path());
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"delete 1\n").unwrap();
    stdin.flush().unwrap();
    thread::sleep(Duration::from_millis(2000));
    stdin.write_all(b"list\nundo\n").unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // The closed window is announced exactly once, at the first prompt
    // after it lapsed, and the slot is gone afterwards.
    assert_eq!(stdout.matches("Undo window closed: Acme").count(), 1);
    assert!(stdout.contains("Nothing to undo."));
}

#[test]
fn test_edit_updates_status() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev", "--date", "2025-05-10"])
        .assert()
        .success();

    jobtrack(temp_dir.path())
        .args(["edit", "1", "--status", "offer"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Application updated (1): Acme"));

    jobtrack(temp_dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Offer"));
}

#[test]
fn test_export_writes_quoted_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_path = temp_dir.path().join("export.csv");

    jobtrack(temp_dir.path())
        .args(["add", "Ac\"me", "Dev", "--date", "2025-05-10", "--notes", "two\nlines"])
        .assert()
        .success();

    jobtrack(temp_dir.path())
        .args(["export", "--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 1 applications"));

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.starts_with("company,position,applyDate,status,jobLink,notes"));
    assert!(content.contains("\"Ac\"\"me\""));
    assert!(content.contains("\"two lines\""));
}

#[test]
fn test_export_empty_store_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_path = temp_dir.path().join("export.csv");

    jobtrack(temp_dir.path())
        .args(["export", "--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("No applications to export."));

    assert!(!out_path.exists());
}

#[test]
fn test_stats_counts() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev", "--status", "offer"])
        .assert()
        .success();
    jobtrack(temp_dir.path())
        .args(["add", "Globex", "SRE", "--status", "rejected"])
        .assert()
        .success();
    jobtrack(temp_dir.path())
        .args(["add", "Initech", "Dev"])
        .assert()
        .success();

    jobtrack(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Total applications: 3"))
        .stdout(predicates::str::is_match(r"Active:\s+1").unwrap())
        .stdout(predicates::str::is_match(r"Offers:\s+1").unwrap());
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["config", "undo-window-secs", "30"])
        .assert()
        .success()
        .stdout(predicates::str::contains("undo-window-secs set to 30"));

    jobtrack(temp_dir.path())
        .args(["config", "undo-window-secs"])
        .assert()
        .success()
        .stdout(predicates::str::contains("30"));

    jobtrack(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("undo-window-secs = 30"));
}

#[test]
fn test_config_rejects_oversized_undo_window() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev"])
        .assert()
        .success();

    jobtrack(temp_dir.path())
        .args(["config", "undo-window-secs", "18446744073709551615"])
        .assert()
        .success()
        .stdout(predicates::str::contains("undo-window-secs must be at most 86400"));

    // The rejected value never took effect; deleting still works.
    jobtrack(temp_dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Application deleted (1): Acme"));
}

#[test]
fn test_unknown_index_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error: Api error: Index 99 not found"));
}

#[test]
fn test_invalid_date_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev", "--date", "May 10"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid date"));
}

#[test]
fn test_invalid_status_lists_valid_tokens() {
    let temp_dir = tempfile::tempdir().unwrap();

    jobtrack(temp_dir.path())
        .args(["add", "Acme", "Dev", "--status", "ghosted"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown status"));
}
