//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn annonce_lola_bin() -> Command {
    Command::cargo_bin("annonce-lola").expect("binary exists")
}

#[test]
fn help_output() {
    annonce_lola_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stdout"))
        .stdout(predicate::str::contains("hallowed object"));
}

#[test]
fn version_output() {
    annonce_lola_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("annonce-lola"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn stdout_flag_prints_the_two_line_announcement() {
    let output = annonce_lola_bin()
        .arg("--stdout")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.trim_end().lines().collect();
    assert_eq!(lines.len(), 2, "expected two lines, got: {}", stdout);
    assert!(lines[0].starts_with("Chalut ! Aujourd'hui, "));
    assert!(lines[0].contains("c'est la Saint"));
    assert!(lines[0].ends_with('.'));
    assert!(lines[1].starts_with("Bonne fête à tou"));
    assert!(lines[1].ends_with("🎆"));
}

#[test]
fn stdout_flag_is_deterministic_within_a_day() {
    let run = || {
        annonce_lola_bin()
            .arg("--stdout")
            .output()
            .expect("Failed to execute command")
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[cfg(target_os = "linux")]
fn fake_notify_send(dir: &std::path::Path, exit_code: u8) {
    use std::os::unix::fs::PermissionsExt;

    let tool = dir.join("notify-send");
    std::fs::write(&tool, format!("#!/bin/sh\nexit {}\n", exit_code)).expect("write fake tool");
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
        .expect("mark fake tool executable");
}

#[cfg(target_os = "linux")]
#[test]
fn succeeding_notifier_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fake_notify_send(dir.path(), 0);

    annonce_lola_bin().env("PATH", dir.path()).assert().success();
}

#[cfg(target_os = "linux")]
#[test]
fn failing_notifier_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    fake_notify_send(dir.path(), 1);

    annonce_lola_bin()
        .env("PATH", dir.path())
        .assert()
        .failure()
        .code(1);
}

#[cfg(target_os = "linux")]
#[test]
fn missing_notifier_exits_nonzero() {
    // An empty PATH: the tool cannot be found at all.
    let dir = tempfile::tempdir().unwrap();

    annonce_lola_bin()
        .env("PATH", dir.path())
        .assert()
        .failure()
        .code(1);
}

#[cfg(target_os = "linux")]
#[test]
fn stdout_flag_ignores_notifier_availability() {
    let dir = tempfile::tempdir().unwrap();

    annonce_lola_bin()
        .arg("--stdout")
        .env("PATH", dir.path())
        .assert()
        .success();
}

#[test]
fn unknown_flag_is_a_usage_error() {
    annonce_lola_bin()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}
