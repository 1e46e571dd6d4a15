//! CLI tests for `pkl-diag emit`.
//!
//! Verifies the exact bytes that reach stderr through the process-wide
//! writer, in both toggle states.

use std::process::{Command, Output, Stdio};

use pkl_diag::exit_codes;
use pkl_diag::toggle::ENV_VAR;

fn emit(debug: Option<&str>, words: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pkl-diag"));
    cmd.arg("emit")
        .args(words)
        .env_remove("RUST_LOG")
        .env_remove(ENV_VAR);
    if let Some(value) = debug {
        cmd.env(ENV_VAR, value);
    }
    cmd.output().expect("pkl-diag emit")
}

#[test]
fn enabled_emit_writes_one_tagged_line() {
    let output = emit(Some("1"), &["value=42"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(output.stderr, b"[pkl-go] value=42\n");
    assert!(output.stdout.is_empty());
}

#[test]
fn enabled_emit_joins_words() {
    let output = emit(Some("1"), &["evaluator", "started"]);
    assert_eq!(output.stderr, b"[pkl-go] evaluator started\n");
}

#[test]
fn disabled_emit_writes_nothing() {
    for value in [None, Some("true"), Some("0")] {
        let output = emit(value, &["value=42"]);
        assert_eq!(output.status.code(), Some(exit_codes::OK));
        assert!(output.stderr.is_empty(), "PKL_DEBUG={value:?}");
    }
}

#[test]
fn redirected_stderr_does_not_fail_emit() {
    let status = Command::new(env!("CARGO_BIN_EXE_pkl-diag"))
        .args(["emit", "lost"])
        .env_remove("RUST_LOG")
        .env(ENV_VAR, "1")
        .stderr(Stdio::null())
        .status()
        .expect("pkl-diag emit");
    assert_eq!(status.code(), Some(exit_codes::OK));
}

#[test]
fn threaded_emit_keeps_every_line_framed() {
    let output = emit(Some("1"), &["--threads", "8", "burst"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.ends_with('\n'));
    let mut workers: Vec<u32> = stderr
        .lines()
        .map(|line| {
            let worker = line
                .strip_prefix("[pkl-go] burst worker=")
                .unwrap_or_else(|| panic!("malformed line: {line:?}"));
            worker.parse().expect("worker index")
        })
        .collect();
    workers.sort_unstable();
    assert_eq!(workers, (0..8).collect::<Vec<_>>());
}
