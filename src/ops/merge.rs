use crate::interval::Interval;
use std::cmp::Ordering;

/// Merges overlapping and touching intervals into canonical form.
///
/// The result is sorted ascending by start, pairwise disjoint, and strictly
/// non-touching. The input may be unsorted and may contain overlapping,
/// nested, or duplicate intervals.
///
/// # Example
///
/// ```rust
/// use interval_ops::{merge, Interval};
///
/// let merged = merge(vec![
///     Interval::new(1, 3),
///     Interval::new(8, 10),
///     Interval::new(2, 6),
/// ]);
/// assert_eq!(merged, vec![Interval::new(1, 6), Interval::new(8, 10)]);
/// ```
pub fn merge<T: Ord>(intervals: Vec<Interval<T>>) -> Vec<Interval<T>> {
    merge_by(intervals, T::cmp)
}

/// Merges overlapping and touching intervals using an explicit comparator.
///
/// `compare` must be a total order over `T`. Intervals whose ends touch the
/// next start under `compare` are coalesced, same as [`merge`].
///
/// # Example
///
/// ```rust
/// use interval_ops::{merge_by, Interval};
///
/// let merged = merge_by(
///     vec![Interval::new(1.1, 2.2), Interval::new(2.0, 3.3)],
///     f64::total_cmp,
/// );
/// assert_eq!(merged, vec![Interval::new(1.1, 3.3)]);
/// ```
pub fn merge_by<T, F>(mut intervals: Vec<Interval<T>>, mut compare: F) -> Vec<Interval<T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if intervals.len() <= 1 {
        return intervals;
    }

    // Stable sort: equal-start ties keep their input order, which is
    // irrelevant to the merged result.
    intervals.sort_by(|a, b| compare(&a.start, &b.start));

    let mut merged: Vec<Interval<T>> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if compare(&last.end, &interval.start) != Ordering::Less {
                // Overlapping or touching: extend the current run, keeping
                // the larger end (a fully nested interval is a no-op).
                if compare(&last.end, &interval.end) == Ordering::Less {
                    last.end = interval.end;
                }
                continue;
            }
        }
        merged.push(interval);
    }

    debug_assert!(super::assertions::is_canonical_by(&merged, &mut compare));
    merged
}
