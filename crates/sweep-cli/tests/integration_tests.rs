//! End-to-end checks of the `edge-sweep` binary's command-line surface.

use std::process::Command;

fn edge_sweep() -> Command {
    // Find the binary built by cargo
    Command::new(env!("CARGO_BIN_EXE_edge-sweep"))
}

#[test]
fn test_help_command() {
    let output = edge_sweep()
        .arg("--help")
        .output()
        .expect("failed to run edge-sweep");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("delete-fns"));
}

#[test]
fn test_version_command() {
    let output = edge_sweep()
        .arg("--version")
        .output()
        .expect("failed to run edge-sweep");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_delete_fns_help() {
    let output = edge_sweep()
        .args(["delete-fns", "--help"])
        .output()
        .expect("failed to run edge-sweep");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Delete orphaned Lambda@Edge functions"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = edge_sweep()
        .args(["delete-fns", "--dry-run"])
        .output()
        .expect("failed to run edge-sweep");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--dry-run"));
}

#[test]
fn test_missing_subcommand_fails() {
    let output = edge_sweep().output().expect("failed to run edge-sweep");
    assert!(!output.status.success());
}
