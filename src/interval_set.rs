//! A canonical container for non-overlapping, sorted intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval<T>>` and guarantees the canonical
//! invariant at all times: intervals are sorted by start, pairwise disjoint,
//! and touching intervals are merged. Read access is transparent via
//! `Deref<Target = [Interval<T>]>`; mutation goes through methods that
//! re-establish the invariant.

use std::fmt::Display;
use std::ops::Deref;

use crate::interval::Interval;
use crate::ops::{exclude, merge, SweepError};

/// A sorted, non-overlapping set of closed intervals.
///
/// Canonical form is enforced on construction and on every mutation, so the
/// set operations below can skip the re-merge the free functions in
/// [`crate::ops`] must perform on arbitrary input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet<T>(Vec<Interval<T>>);

impl<T> IntervalSet<T> {
    /// Creates an empty interval set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval<T>> {
        self.0
    }

    /// Returns a slice of the intervals.
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord> IntervalSet<T> {
    /// Inserts an interval, maintaining canonical form.
    ///
    /// Appending strictly past the current last interval is O(1); anything
    /// else falls back to a full re-merge.
    pub fn push(&mut self, interval: Interval<T>) {
        if let Some(last) = self.0.last() {
            if last.end >= interval.start {
                self.0.push(interval);
                self.0 = merge(std::mem::take(&mut self.0));
                return;
            }
        }
        self.0.push(interval);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord> IntervalSet<T> {
    /// Returns true if `target` lies entirely within one interval of the set.
    ///
    /// The set is already canonical, so this is a plain scan with no
    /// preparatory merge.
    pub fn includes(&self, target: &Interval<T>) -> bool {
        self.0
            .iter()
            .any(|interval| interval.start <= target.start && interval.end >= target.end)
    }
}

impl<T: Ord + Clone> IntervalSet<T> {
    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        let mut combined = Vec::with_capacity(self.0.len() + other.0.len());
        combined.extend_from_slice(&self.0);
        combined.extend_from_slice(&other.0);
        IntervalSet(merge(combined))
    }

    /// Returns the points covered by `self` but not by `other`.
    pub fn difference(&self, other: &IntervalSet<T>) -> Result<IntervalSet<T>, SweepError> {
        exclude(self.0.clone(), other.0.clone()).map(IntervalSet)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions and iteration
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord> From<Vec<Interval<T>>> for IntervalSet<T> {
    /// Creates an `IntervalSet` from arbitrary input, normalizing on
    /// construction.
    fn from(vec: Vec<Interval<T>>) -> Self {
        Self(merge(vec))
    }
}

impl<T> From<Interval<T>> for IntervalSet<T> {
    /// Creates a single-element `IntervalSet` (always canonical).
    fn from(interval: Interval<T>) -> Self {
        Self(vec![interval])
    }
}

impl<T: Ord> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<Interval<T>> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.0 = merge(std::mem::take(&mut self.0));
    }
}

impl<T> Deref for IntervalSet<T> {
    type Target = [Interval<T>];

    fn deref(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T> AsRef<[Interval<T>]> for IntervalSet<T> {
    fn as_ref(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for IntervalSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl<T: PartialEq> PartialEq<Vec<Interval<T>>> for IntervalSet<T> {
    fn eq(&self, other: &Vec<Interval<T>>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], interval_set)` in tests.
impl<T: PartialEq> PartialEq<IntervalSet<T>> for Vec<Interval<T>> {
    fn eq(&self, other: &IntervalSet<T>) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for IntervalSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for IntervalSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = Vec::<Interval<T>>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i32, end: i32) -> Interval<i32> {
        Interval::new(start, end)
    }

    #[test]
    fn new_is_empty() {
        let set = IntervalSet::<i32>::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn from_unsorted_normalizes() {
        let set = IntervalSet::from(vec![iv(20, 30), iv(0, 10)]);
        assert_eq!(set, vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn from_overlapping_merges() {
        let set = IntervalSet::from(vec![iv(0, 60), iv(40, 100)]);
        assert_eq!(set, vec![iv(0, 100)]);
    }

    #[test]
    fn from_abutting_merges() {
        let set = IntervalSet::from(vec![iv(0, 50), iv(50, 100)]);
        assert_eq!(set, vec![iv(0, 100)]);
    }

    #[test]
    fn from_iterator() {
        let set: IntervalSet<i32> = vec![iv(20, 30), iv(0, 10)].into_iter().collect();
        assert_eq!(set, vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn push_into_empty() {
        let mut set = IntervalSet::new();
        set.push(iv(10, 20));
        assert_eq!(set, vec![iv(10, 20)]);
    }

    #[test]
    fn push_appends_in_order() {
        let mut set = IntervalSet::from(vec![iv(0, 10)]);
        set.push(iv(20, 30));
        assert_eq!(set, vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn push_abutting_merges() {
        let mut set = IntervalSet::from(vec![iv(0, 10)]);
        set.push(iv(10, 20));
        assert_eq!(set, vec![iv(0, 20)]);
    }

    #[test]
    fn push_bridging_multiple_merges() {
        let mut set = IntervalSet::from(vec![iv(0, 10), iv(20, 30)]);
        set.push(iv(5, 25));
        assert_eq!(set, vec![iv(0, 30)]);
    }

    #[test]
    fn extend_normalizes() {
        let mut set = IntervalSet::from(vec![iv(0, 10)]);
        set.extend(vec![iv(30, 40), iv(5, 15)]);
        assert_eq!(set, vec![iv(0, 15), iv(30, 40)]);
    }

    #[test]
    fn includes_within_set() {
        let set = IntervalSet::from(vec![iv(1, 3), iv(2, 5), iv(8, 10)]);
        assert!(set.includes(&iv(1, 5)));
        assert!(set.includes(&iv(8, 9)));
        assert!(!set.includes(&iv(3, 7)));
    }

    #[test]
    fn union_overlapping() {
        let a = IntervalSet::from(vec![iv(0, 50)]);
        let b = IntervalSet::from(vec![iv(30, 80)]);
        assert_eq!(a.union(&b), vec![iv(0, 80)]);
    }

    #[test]
    fn union_disjoint() {
        let a = IntervalSet::from(vec![iv(0, 10)]);
        let b = IntervalSet::from(vec![iv(20, 30)]);
        assert_eq!(a.union(&b), vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn difference_carves_holes() {
        let a = IntervalSet::from(vec![iv(1, 10)]);
        let b = IntervalSet::from(vec![iv(3, 5)]);
        assert_eq!(a.difference(&b).unwrap(), vec![iv(1, 3), iv(5, 10)]);
    }

    #[test]
    fn difference_complete() {
        let a = IntervalSet::from(vec![iv(3, 6)]);
        let b = IntervalSet::from(vec![iv(2, 7)]);
        assert!(a.difference(&b).unwrap().is_empty());
    }

    #[test]
    fn deref_provides_slice_methods() {
        let set = IntervalSet::from(vec![iv(0, 10), iv(20, 30)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&iv(0, 10)));
        assert_eq!(set.last(), Some(&iv(20, 30)));
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn into_inner_returns_vec() {
        let set = IntervalSet::from(vec![iv(0, 10), iv(20, 30)]);
        assert_eq!(set.into_inner(), vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn display_format() {
        let set = IntervalSet::from(vec![iv(0, 10), iv(20, 30)]);
        assert_eq!(format!("{}", set), "{[0, 10], [20, 30]}");
    }

    #[test]
    fn default_is_empty() {
        let set = IntervalSet::<i32>::default();
        assert!(set.is_empty());
    }
}
