//! Baseline report
//!
//! The no-argument run prints a fixed two-block text: the Fibonacci(40)
//! result, a blank line, then the 100M loop sum. The format is a contract
//! shared with the other language implementations of this suite, so it is
//! rendered here byte-for-byte rather than assembled ad hoc in the CLI.

use crate::fib::fib_naive;
use crate::sum::sum_range;

/// Fibonacci input for the baseline run.
pub const FIB_N: i64 = 40;

/// Loop iteration count for the baseline run.
pub const LOOP_ITERATIONS: i64 = 100_000_000;

/// Render the baseline text for the given results.
pub fn render(fib: i64, sum: i64) -> String {
    format!("Fibonacci(40):\n{}\n\nLoop 100M iterations:\n{}\n", fib, sum)
}

/// Execute both baseline workloads and render the report.
pub fn run_baseline() -> String {
    let fib = fib_naive(FIB_N);
    let sum = sum_range(LOOP_ITERATIONS);
    render(fib, sum)
}
