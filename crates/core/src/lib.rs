//! hotloop core: CPU micro-benchmark kernels and measurement harness
//!
//! This crate provides the numeric workloads and the thin timing layer the
//! `hotloop` binary is built on. Nothing here decides what gets printed or
//! how the process exits; that belongs to the CLI.
//!
//! # Modules
//!
//! - `fib`: naive recursive and iterative Fibonacci
//! - `sum`: counted accumulation loop and its closed form
//! - `dive`: deep self-recursion carrying ballast values
//! - `measure`: `Instant`-based timing producing [`Measurement`]s
//! - `report`: the fixed baseline stdout text
//! - `suite`: the named, verified benchmark cases

pub mod dive;
pub mod fib;
pub mod measure;
pub mod report;
pub mod suite;
pub mod sum;

pub use measure::Measurement;
pub use suite::{Case, Outcome, SuiteError};
