//! Modular arithmetic over the circular index space `[0, count)`.
//!
//! Index `count - 1` is adjacent to index 0; the boundary between them is the
//! seam. Callers guarantee `count >= 1` — the empty state is handled before
//! index math is reached.

/// Wraps `index` into `[0, count)`.
pub fn wrap(index: i64, count: usize) -> usize {
    debug_assert!(count > 0, "index space is empty (count=0)");
    let count = count as i64;
    (((index % count) + count) % count) as usize
}

/// The next index in the loop, crossing the seam after `count - 1`.
pub fn increment(index: usize, count: usize) -> usize {
    wrap(index as i64 + 1, count)
}

/// The previous index in the loop, crossing the seam before 0.
pub fn decrement(index: usize, count: usize) -> usize {
    wrap(index as i64 - 1, count)
}

/// The two path lengths between a pair of indices in a circular space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopDistances {
    /// Distance along the path that stays inside the loop.
    pub in_loop: usize,
    /// Distance along the path that crosses the seam.
    pub over_seam: usize,
}

/// Distances between `a` and `b`, both ways around the loop.
pub fn distances(a: usize, b: usize, count: usize) -> LoopDistances {
    debug_assert!(count > 0, "index space is empty (count=0)");
    debug_assert!(a < count && b < count, "index out of range");
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    LoopDistances {
        in_loop: hi - lo,
        over_seam: count - hi + lo,
    }
}
