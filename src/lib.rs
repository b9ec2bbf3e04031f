//! interval-ops - set-theoretic operations over closed intervals
//!
//! A small library for working with closed ranges `[start, end]` over any
//! totally ordered element type: merging overlapping intervals into canonical
//! disjoint form, testing whether a collection fully covers a target interval,
//! and computing the set difference of one collection against another.
//!
//! All operations are pure, single-pass over sorted data, and allocate fresh
//! results; nothing is shared or mutated across calls.
//!
//! # Example
//!
//! ```rust
//! use interval_ops::{exclude, includes, merge, Interval};
//!
//! let merged = merge(vec![
//!     Interval::new(1, 3),
//!     Interval::new(8, 10),
//!     Interval::new(2, 6),
//! ]);
//! assert_eq!(merged, vec![Interval::new(1, 6), Interval::new(8, 10)]);
//!
//! assert!(includes(merged.clone(), &Interval::new(2, 5)));
//!
//! let remaining = exclude(merged, vec![Interval::new(4, 9)])?;
//! assert_eq!(remaining, vec![Interval::new(1, 4), Interval::new(9, 10)]);
//! # Ok::<(), interval_ops::SweepError>(())
//! ```
//!
//! Element types without a usable [`Ord`] instance (such as `f64`) go through
//! the `_by` variants with an explicit comparator:
//!
//! ```rust
//! use interval_ops::{merge_by, Interval};
//!
//! let merged = merge_by(
//!     vec![Interval::new(1.5, 3.0), Interval::new(2.5, 4.0)],
//!     f64::total_cmp,
//! );
//! assert_eq!(merged, vec![Interval::new(1.5, 4.0)]);
//! ```

pub mod interval;
pub mod interval_set;
pub mod ops;

pub use interval::Interval;
pub use interval_set::IntervalSet;
pub use ops::{exclude, exclude_by, includes, includes_by, merge, merge_by, SweepError};
