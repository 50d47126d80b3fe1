//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Command builders with a fixed environment
//! - Helpers that run a query and return its stdout

use assert_cmd::Command;

/// Get a bare command builder.
///
/// `CFGTREE_PATH_SEP`, `CFGTREE_LOG_MODE` and `CFGTREE_OUTPUT_FORMAT` are
/// cleared so the developer's shell cannot change test results.
pub fn command() -> Command {
    let mut cmd = Command::cargo_bin("cfgtree").expect("Failed to find cfgtree binary");
    cmd.env_remove("CFGTREE_PATH_SEP")
        .env_remove("CFGTREE_LOG_MODE")
        .env_remove("CFGTREE_OUTPUT_FORMAT");
    cmd
}

/// Get a command builder with one `--set` per assignment.
pub fn command_with(assignments: &[&str]) -> Command {
    let mut cmd = command();
    for assignment in assignments {
        cmd.arg("--set").arg(assignment);
    }
    cmd
}

/// Run a command built from `assignments` plus `args` and return its stdout.
///
/// # Panics
/// Panics if the command fails.
#[allow(dead_code)]
pub fn run_ok(assignments: &[&str], args: &[&str]) -> String {
    let output = command_with(assignments)
        .args(args)
        .output()
        .expect("Failed to run cfgtree");

    assert!(
        output.status.success(),
        "cfgtree {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
}

/// A small service tree used across tests.
#[allow(dead_code)]
pub const SERVICE: &[&str] = &[
    "service.name=api",
    "service.ports.0=8080",
    "service.ports.2=8443",
    "service.tls.enabled=true",
    "service.timeout=2.5",
    "debug=false",
];
