//! Set-theoretic operations over interval collections.
//!
//! Each operation comes in two flavours, in the style of `slice::sort` /
//! `slice::sort_by`: the plain entry point orders elements through their
//! [`Ord`] instance, while the `_by` variant takes an explicit comparator for
//! element types without a usable total order (e.g. `f64` via
//! [`f64::total_cmp`]).

mod error;
mod exclude;
mod includes;
mod merge;

pub use error::SweepError;
pub use exclude::{exclude, exclude_by};
pub use includes::{includes, includes_by};
pub use merge::{merge, merge_by};

#[cfg(debug_assertions)]
pub(crate) mod assertions;

#[cfg(not(debug_assertions))]
pub(crate) mod assertions {
    use crate::interval::Interval;
    use std::cmp::Ordering;

    pub fn is_canonical_by<T, F>(_intervals: &[Interval<T>], _compare: &mut F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        true
    }
}
