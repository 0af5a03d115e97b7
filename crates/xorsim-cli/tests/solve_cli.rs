use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_xorsim-cli"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn xorsim-cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait xorsim-cli")
}

fn stdout_ok(out: &Output) -> String {
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn solve_reads_judge_input_from_stdin() {
    let out = run_with_stdin(&["solve"], "3 1 1\n1 2 3\n");
    assert_eq!(stdout_ok(&out).trim(), "0 3");
}

#[test]
fn solve_fixed_point_scenario() {
    let out = run_with_stdin(&["solve", "--stats"], "4 2 3\n0 0 0 0\n");
    assert_eq!(stdout_ok(&out).trim(), "0 3");
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("rounds          = 2"), "stderr:\n{err}");
}

#[test]
fn rounds_override_and_own_source() {
    // K=0: untouched input
    let out = run_with_stdin(&["solve", "--rounds", "0"], "3 1 1\n1 2 3\n");
    assert_eq!(stdout_ok(&out).trim(), "1 3");

    // Own: 2 -> 2^1 = 3
    let out = run_with_stdin(&["solve", "--xor-source", "own"], "3 1 1\n1 2 3\n");
    assert_eq!(stdout_ok(&out).trim(), "1 3");
}

#[test]
fn trace_emits_one_line_per_round() {
    let out = run_with_stdin(&["trace"], "4 3 3\n0 0 0 0\n");
    let s = stdout_ok(&out);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], r#"{"round":1,"min":0,"max":3,"occupied":2,"moved":2}"#);
}

#[test]
fn table_lists_non_empty_buckets() {
    let out = run_with_stdin(&["table"], "3 1 1\n1 2 3\n");
    let s = stdout_ok(&out);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"value":0,"count":1}"#,
            r#"{"value":1,"count":1}"#,
            r#"{"value":3,"count":1}"#,
        ]
    );
}

#[test]
fn check_agrees_with_naive() {
    let out = run_with_stdin(&["check", "--xor-source", "own"], "7 9 5\n3 1 4 1 5 9 2\n");
    stdout_ok(&out);
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(
        err.contains("ok check: n=7 rounds=9 mask=5 xor_source=Own"),
        "stderr:\n{err}"
    );
}

#[test]
fn out_of_domain_explicit_bits_fails() {
    let out = run_with_stdin(&["solve", "--domain-bits", "2"], "2 1 1\n1 7\n");
    assert!(!out.status.success());
}

#[test]
fn malformed_input_fails() {
    let out = run_with_stdin(&["solve"], "3 1 1\n1 2\n");
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("expected 3 values, got 2"), "stderr:\n{err}");
}

#[test]
fn selfcheck_small_run() {
    let out = run_with_stdin(&["selfcheck", "--cases", "300", "--seed", "0x1234"], "");
    stdout_ok(&out);
    assert!(String::from_utf8_lossy(&out.stderr).contains("ok selfcheck"));
}

#[test]
fn selfcheck_rejects_unbounded_rounds() {
    let out = run_with_stdin(
        &["selfcheck", "--cases", "1", "--max-rounds", "18446744073709551615"],
        "",
    );
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("max_rounds must be <="), "stderr:\n{err}");
}
