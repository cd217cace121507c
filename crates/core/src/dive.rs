//! Stack dive kernel
//!
//! Deep self-recursion carrying eight i64 ballast values, incrementing all
//! of them each frame. The ballast keeps the frame from degenerating into a
//! bare counter loop under optimization.
//!
//! Rust does not guarantee tail-call elimination, so a deep dive must run on
//! a thread with an explicitly sized stack; see [`dive_on_thread`].

use std::io;
use std::thread;

/// Default dive depth for the timed suite.
pub const DIVE_LIMIT: i64 = 1_000_000;

/// Stack reservation for the dive worker thread. Generous enough for the
/// default depth in unoptimized builds.
pub const DIVE_STACK_BYTES: usize = 256 * 1024 * 1024;

/// Recurse from `depth` up to `limit`, bumping every ballast value once per
/// frame. Returns the final depth, which equals `limit`.
///
/// The caller is responsible for having enough stack; each frame holds the
/// ballast array by value.
pub fn dive(limit: i64, depth: i64, ballast: [i64; 8]) -> i64 {
    if depth >= limit {
        return depth;
    }
    let mut next = ballast;
    for slot in &mut next {
        *slot += 1;
    }
    dive(limit, depth + 1, next)
}

/// Run [`dive`] on a dedicated worker thread with `stack_bytes` of stack.
///
/// Joins before returning, so the dive never overlaps other work.
pub fn dive_on_thread(limit: i64, stack_bytes: usize) -> io::Result<i64> {
    let handle = thread::Builder::new()
        .name("stack-dive".to_string())
        .stack_size(stack_bytes)
        .spawn(move || dive(limit, 0, [1, 2, 3, 4, 5, 6, 7, 8]))?;
    handle
        .join()
        .map_err(|_| io::Error::other("stack dive worker panicked"))
}
