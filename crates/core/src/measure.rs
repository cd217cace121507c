//! Timing harness
//!
//! Wall-clock measurement of a single workload invocation using
//! `std::time::Instant`. One [`Measurement`] per executed case, printable in
//! the `BENCH:<suite>:<case>:<result>:<time_ms>` line format shared by the
//! cross-language benchmark runners.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Outcome of timing one benchmark case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Case name, e.g. "fib-naive-40"
    pub name: String,
    /// The computed value, kept so reports stay verifiable after the fact
    pub result: i64,
    /// Wall-clock time in whole milliseconds
    pub elapsed_ms: u64,
}

impl Measurement {
    pub fn new(name: &str, result: i64, elapsed: Duration) -> Self {
        Self {
            name: name.to_string(),
            result,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    /// The machine-parseable line the suite prints for this case.
    pub fn bench_line(&self, suite: &str) -> String {
        format!(
            "BENCH:{}:{}:{}:{}",
            suite, self.name, self.result, self.elapsed_ms
        )
    }
}

/// Time a single invocation of `f`.
pub fn time<F>(name: &str, f: F) -> Measurement
where
    F: FnOnce() -> i64,
{
    let start = Instant::now();
    let result = f();
    Measurement::new(name, result, start.elapsed())
}

/// Time a fallible invocation of `f`, propagating its error untimed.
pub fn try_time<F, E>(name: &str, f: F) -> Result<Measurement, E>
where
    F: FnOnce() -> Result<i64, E>,
{
    let start = Instant::now();
    let result = f()?;
    Ok(Measurement::new(name, result, start.elapsed()))
}
