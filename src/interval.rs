//! Closed interval representation shared by all set operations.

use std::fmt::Display;

/// Closed range `[start, end]` over an ordered element type.
///
/// A well-formed interval satisfies `start <= end` under the ordering the
/// interval is used with. This is a precondition, not an enforced invariant:
/// the operations in this crate do not validate it, and a reversed interval
/// produces unspecified (garbage, not undefined-behavior) results.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

impl<T> Interval<T> {
    /// Creates interval `[start, end]`.
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: Ord> Interval<T> {
    /// Returns true if `point` ∈ `[start, end]`.
    pub fn contains(&self, point: &T) -> bool {
        self.start <= *point && *point <= self.end
    }

    /// Checks if this interval overlaps with another interval.
    ///
    /// Endpoints are inclusive, so intervals that merely touch
    /// (`self.end == other.start`) count as overlapping.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Returns the common sub-range of two intervals, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use interval_ops::Interval;
    ///
    /// let a = Interval::new(0, 50);
    /// let b = Interval::new(30, 80);
    /// assert_eq!(a.intersection(&b), Some(Interval::new(30, 50)));
    /// ```
    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if self.overlaps(other) {
            let start = if self.start > other.start {
                self.start.clone()
            } else {
                other.start.clone()
            };
            let end = if self.end < other.end {
                self.end.clone()
            } else {
                other.end.clone()
            };
            Some(Interval::new(start, end))
        } else {
            None
        }
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
