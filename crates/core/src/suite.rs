//! The timed benchmark suite
//!
//! Named cases with known-good expected values, run sequentially in
//! registration order. A case that produces the wrong value is still
//! reported with its measurement; the caller decides how loudly to fail.

use crate::dive::{DIVE_LIMIT, DIVE_STACK_BYTES, dive_on_thread};
use crate::fib::{fib_iter, fib_naive};
use crate::measure::{Measurement, try_time};
use crate::report::LOOP_ITERATIONS;
use crate::sum::sum_range;
use std::io;
use tracing::debug;

/// Suite name used in BENCH output lines.
pub const SUITE: &str = "hotloop";

/// Errors that stop the suite before all cases have run.
///
/// Wrong results are not errors at this level; they are recorded in the
/// [`Outcome`] and surfaced by the caller.
#[derive(Debug)]
pub enum SuiteError {
    /// The stack-dive worker thread could not be spawned or panicked
    Worker(io::Error),
}

impl std::fmt::Display for SuiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuiteError::Worker(e) => write!(f, "benchmark worker failed: {}", e),
        }
    }
}

impl std::error::Error for SuiteError {}

impl From<io::Error> for SuiteError {
    fn from(e: io::Error) -> Self {
        SuiteError::Worker(e)
    }
}

type CaseFn = fn() -> Result<i64, SuiteError>;

/// One registered benchmark case.
pub struct Case {
    pub name: &'static str,
    /// Known-good result the measurement is checked against
    pub expected: i64,
    /// Back-to-back invocations timed as one measurement (1 = single shot)
    pub iterations: u32,
    run: CaseFn,
}

/// A measured case together with its expected value.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub measurement: Measurement,
    pub expected: i64,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.measurement.result == self.expected
    }
}

/// The registered cases, slowest last so partial output stays useful.
pub fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "fib-fast-50",
            expected: 12586269025,
            iterations: 1,
            run: || Ok(fib_iter(50)),
        },
        Case {
            name: "fib-fast-70",
            expected: 190392490709135,
            iterations: 1,
            run: || Ok(fib_iter(70)),
        },
        Case {
            name: "fib-naive-20-x1000",
            expected: 6765,
            iterations: 1000,
            run: || Ok(fib_naive(20)),
        },
        Case {
            name: "fib-naive-30",
            expected: 832040,
            iterations: 1,
            run: || Ok(fib_naive(30)),
        },
        Case {
            name: "fib-naive-35",
            expected: 9227465,
            iterations: 1,
            run: || Ok(fib_naive(35)),
        },
        Case {
            name: "fib-naive-40",
            expected: 102334155,
            iterations: 1,
            run: || Ok(fib_naive(40)),
        },
        Case {
            name: "sum-100m",
            expected: 4_999_999_950_000_000,
            iterations: 1,
            run: || Ok(sum_range(LOOP_ITERATIONS)),
        },
        Case {
            name: "stack-dive-1m",
            expected: DIVE_LIMIT,
            iterations: 1,
            run: || Ok(dive_on_thread(DIVE_LIMIT, DIVE_STACK_BYTES)?),
        },
    ]
}

/// Run every case whose name contains `filter` (all cases when `None`).
///
/// A filter matching nothing yields an empty, successful run, mirroring
/// test-runner filter semantics.
pub fn run(filter: Option<&str>) -> Result<Vec<Outcome>, SuiteError> {
    let mut outcomes = Vec::new();
    for case in cases() {
        if let Some(pat) = filter {
            if !case.name.contains(pat) {
                continue;
            }
        }
        debug!(case = case.name, iterations = case.iterations, "running case");
        let measurement = try_time(case.name, || {
            let mut result = 0;
            for _ in 0..case.iterations {
                result = (case.run)()?;
            }
            Ok::<i64, SuiteError>(result)
        })?;
        outcomes.push(Outcome {
            measurement,
            expected: case.expected,
        });
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_names_are_unique() {
        let cases = cases();
        for (i, a) in cases.iter().enumerate() {
            for b in &cases[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_filter_selects_by_substring() {
        let outcomes = run(Some("fib-fast")).unwrap();
        let names: Vec<_> = outcomes.iter().map(|o| o.measurement.name.as_str()).collect();
        assert_eq!(names, ["fib-fast-50", "fib-fast-70"]);
        assert!(outcomes.iter().all(|o| o.passed()));
    }

    #[test]
    fn test_filter_matching_nothing_is_empty_success() {
        let outcomes = run(Some("no-such-case")).unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_repeated_case_reports_last_result() {
        let outcomes = run(Some("fib-naive-20-x1000")).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].measurement.result, 6765);
        assert!(outcomes[0].passed());
    }
}
