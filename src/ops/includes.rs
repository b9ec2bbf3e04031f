use crate::interval::Interval;
use crate::ops::merge::merge_by;
use std::cmp::Ordering;

/// Checks if a collection of intervals fully covers `target`.
///
/// The collection is merged first, so coverage may be assembled from several
/// overlapping or touching input intervals — but never across a gap: `target`
/// must fit inside a single merged interval.
///
/// # Example
///
/// ```rust
/// use interval_ops::{includes, Interval};
///
/// let intervals = vec![Interval::new(1, 3), Interval::new(2, 5), Interval::new(8, 10)];
/// assert!(includes(intervals.clone(), &Interval::new(1, 5)));
/// assert!(!includes(intervals, &Interval::new(3, 7)));
/// ```
pub fn includes<T: Ord>(intervals: Vec<Interval<T>>, target: &Interval<T>) -> bool {
    includes_by(intervals, target, T::cmp)
}

/// Checks coverage of `target` using an explicit comparator.
///
/// An empty collection covers nothing and returns `false`.
pub fn includes_by<T, F>(intervals: Vec<Interval<T>>, target: &Interval<T>, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if intervals.is_empty() {
        return false;
    }

    let merged = merge_by(intervals, &mut compare);

    // TODO: binary-search the merged starts instead of scanning.
    merged.iter().any(|interval| {
        compare(&interval.start, &target.start) != Ordering::Greater
            && compare(&interval.end, &target.end) != Ordering::Less
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i32, end: i32) -> Interval<i32> {
        Interval::new(start, end)
    }

    #[test]
    fn includes_empty_collection() {
        assert!(!includes(vec![], &iv(1, 2)));
    }

    #[test]
    fn includes_single_interval() {
        assert!(includes(vec![iv(1, 5)], &iv(2, 4)));
        assert!(includes(vec![iv(1, 5)], &iv(1, 5)));
        assert!(!includes(vec![iv(1, 5)], &iv(0, 6)));
        assert!(!includes(vec![iv(1, 5)], &iv(0, 3)));
        assert!(!includes(vec![iv(1, 5)], &iv(3, 6)));
    }

    #[test]
    fn includes_multiple_intervals() {
        assert!(includes(vec![iv(1, 3), iv(5, 7)], &iv(2, 3)));
        assert!(includes(vec![iv(1, 3), iv(5, 7)], &iv(5, 6)));
        // Coverage cannot be spliced across a gap.
        assert!(!includes(vec![iv(1, 3), iv(5, 7)], &iv(3, 5)));
        assert!(!includes(vec![iv(1, 3), iv(5, 7)], &iv(2, 6)));
    }

    #[test]
    fn includes_point_targets() {
        assert!(includes(vec![iv(1, 5)], &iv(1, 1)));
        assert!(includes(vec![iv(1, 5)], &iv(5, 5)));
        assert!(!includes(vec![iv(1, 5)], &iv(0, 0)));
        assert!(!includes(vec![iv(1, 5)], &iv(6, 6)));
    }

    #[test]
    fn includes_after_merging() {
        let intervals = vec![iv(1, 3), iv(2, 5), iv(8, 10)];
        assert!(includes(intervals.clone(), &iv(2, 5)));
        assert!(includes(intervals.clone(), &iv(1, 5)));
        assert!(!includes(intervals, &iv(3, 7)));
    }

    #[test]
    fn includes_by_comparator() {
        let intervals = vec![
            Interval::new(1.0, 10.0),
            Interval::new(15.0, 25.0),
        ];
        assert!(includes_by(
            intervals.clone(),
            &Interval::new(2.0, 8.0),
            f64::total_cmp
        ));
        assert!(includes_by(
            intervals.clone(),
            &Interval::new(1.0, 10.0),
            f64::total_cmp
        ));
        assert!(!includes_by(
            intervals.clone(),
            &Interval::new(5.0, 12.0),
            f64::total_cmp
        ));
        assert!(!includes_by(
            intervals.clone(),
            &Interval::new(11.0, 14.0),
            f64::total_cmp
        ));
        assert!(!includes_by(
            intervals,
            &Interval::new(5.0, 20.0),
            f64::total_cmp
        ));
    }
}
