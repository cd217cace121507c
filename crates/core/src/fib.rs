//! Fibonacci kernels
//!
//! Two forms of the same function: the deliberately slow double recursion
//! that the benchmark exists to measure, and the linear iterative form used
//! for fast cases and as an oracle in tests.

/// Naive double-recursive Fibonacci: F(0)=0, F(1)=1, F(n)=F(n-1)+F(n-2).
///
/// Unmemoized on purpose. O(phi^n) time, recursion depth n. Callers pass
/// non-negative n; for n < 2 the input is returned unchanged.
pub fn fib_naive(n: i64) -> i64 {
    if n < 2 {
        n
    } else {
        fib_naive(n - 1) + fib_naive(n - 2)
    }
}

/// Iterative Fibonacci, O(n) time and constant space.
///
/// Stays within i64 up to n = 92.
pub fn fib_iter(n: i64) -> i64 {
    if n < 2 {
        return n;
    }
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 1..n {
        let tmp = a + b;
        a = b;
        b = tmp;
    }
    b
}
