//! End-to-end tests driving the hotloop binary
//!
//! The baseline stdout text is a cross-language contract, so it is asserted
//! byte-for-byte here, including the blank line between the two blocks.

use std::process::Command;

const BASELINE_OUTPUT: &str =
    "Fibonacci(40):\n102334155\n\nLoop 100M iterations:\n4999999950000000\n";

fn hotloop() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hotloop"))
}

#[test]
fn test_baseline_output_is_exact_and_idempotent() {
    let first = hotloop().output().unwrap();
    assert!(first.status.success());
    assert_eq!(String::from_utf8(first.stdout).unwrap(), BASELINE_OUTPUT);

    // Recomputation must produce identical output
    let second = hotloop().output().unwrap();
    assert!(second.status.success());
    assert_eq!(String::from_utf8(second.stdout).unwrap(), BASELINE_OUTPUT);
}

#[test]
fn test_bench_lines_are_well_formed() {
    let out = hotloop()
        .args(["bench", "--filter", "fib-fast"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    for line in lines {
        let fields: Vec<&str> = line.split(':').collect();
        assert_eq!(fields.len(), 5, "bad line: {}", line);
        assert_eq!(fields[0], "BENCH");
        assert_eq!(fields[1], "hotloop");
        assert!(fields[2].starts_with("fib-fast-"));
        fields[3].parse::<i64>().unwrap();
        fields[4].parse::<u64>().unwrap();
    }
}

#[test]
fn test_bench_filter_matching_nothing_succeeds_quietly() {
    let out = hotloop()
        .args(["bench", "--filter", "no-such-case"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_bench_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    let out = hotloop()
        .args(["bench", "--filter", "fib-fast"])
        .arg("--json")
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());

    let report = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    let cases = parsed.as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0]["name"], "fib-fast-50");
    assert_eq!(cases[0]["result"], 12586269025i64);
    assert_eq!(cases[1]["name"], "fib-fast-70");
}

#[test]
fn test_bench_json_unwritable_path_fails() {
    let out = hotloop()
        .args(["bench", "--filter", "fib-fast"])
        .args(["--json", "/no/such/dir/report.json"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to write report"));
}

#[test]
fn test_completions_generate() {
    let out = hotloop().args(["completions", "bash"]).output().unwrap();
    assert!(out.status.success());
    let script = String::from_utf8(out.stdout).unwrap();
    assert!(script.contains("hotloop"));
}
