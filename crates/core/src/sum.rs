//! Accumulation loop kernel
//!
//! A counted loop summing integers into a single i64 accumulator. The 100M
//! baseline sum is 4,999,999,950,000,000 which overflows i32 but not i64.

/// Sum of all integers in the half-open range [0, n).
///
/// Implemented as a counted loop incrementing by 1 each iteration, no early
/// exit. This is the workload; use [`triangular`] when you just want the
/// answer.
pub fn sum_range(n: i64) -> i64 {
    let mut sum: i64 = 0;
    let mut i: i64 = 0;
    while i < n {
        sum += i;
        i += 1;
    }
    sum
}

/// Closed form of [`sum_range`]: n*(n-1)/2.
pub fn triangular(n: i64) -> i64 {
    n * (n - 1) / 2
}
