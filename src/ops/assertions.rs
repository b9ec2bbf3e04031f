//! Debug-only invariant checks for canonical interval sequences.

use crate::interval::Interval;
use std::cmp::Ordering;

/// Returns true if `intervals` is canonical under `compare`: sorted ascending
/// by start, pairwise disjoint, and strictly non-touching (previous end is
/// before the next start).
pub fn is_canonical_by<T, F>(intervals: &[Interval<T>], compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    intervals
        .windows(2)
        .all(|w| compare(&w[0].end, &w[1].start) == Ordering::Less)
}
