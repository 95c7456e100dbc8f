//! Shared helpers for integration tests.

use std::process::Command;

/// Run a binary and capture (stdout, stderr, exit code).
fn run(exe: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(exe)
        .args(args)
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

pub fn run_get_from_json(args: &[&str]) -> (String, String, i32) {
    run(env!("CARGO_BIN_EXE_get_from_json"), args)
}

pub fn run_replace_in_file(args: &[&str]) -> (String, String, i32) {
    run(env!("CARGO_BIN_EXE_replace_in_file"), args)
}
