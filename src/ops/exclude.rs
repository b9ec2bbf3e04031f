use crate::interval::Interval;
use crate::ops::error::SweepError;
use crate::ops::merge::merge_by;
use std::cmp::Ordering;

/// Removes the coverage of `to_exclude` from `to_include`.
///
/// Both inputs are merged into canonical form first, then swept together in
/// a single pass over their interval edges. The result contains exactly the
/// points covered by `to_include` and not covered by `to_exclude`, as a
/// canonical sequence; zero-width remnants are dropped.
///
/// # Errors
///
/// Returns [`SweepError::UnreachableState`] if the sweep encounters an edge
/// sequence that canonical inputs cannot produce. This indicates a defect in
/// the library rather than invalid caller input.
///
/// # Example
///
/// ```rust
/// use interval_ops::{exclude, Interval};
///
/// let remaining = exclude(vec![Interval::new(1, 10)], vec![Interval::new(3, 5)])?;
/// assert_eq!(remaining, vec![Interval::new(1, 3), Interval::new(5, 10)]);
/// # Ok::<(), interval_ops::SweepError>(())
/// ```
pub fn exclude<T: Ord + Clone>(
    to_include: Vec<Interval<T>>,
    to_exclude: Vec<Interval<T>>,
) -> Result<Vec<Interval<T>>, SweepError> {
    exclude_by(to_include, to_exclude, T::cmp)
}

/// Which merged collection an edge was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Include,
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeKind {
    Start,
    End,
}

/// Sweep position relative to the two merged collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepState {
    Outside,
    InIncludeOnly,
    InExcludeOnly,
    InBoth,
}

/// Walks the `2n` edges of a canonical interval sequence in the fixed order
/// `start_0, end_0, start_1, end_1, ...`, which is globally ascending because
/// the sequence is merged and disjoint.
struct EdgeCursor<'a, T> {
    intervals: &'a [Interval<T>],
    next: usize,
}

impl<'a, T> EdgeCursor<'a, T> {
    fn new(intervals: &'a [Interval<T>]) -> Self {
        Self { intervals, next: 0 }
    }

    fn peek(&self) -> Option<(EdgeKind, &'a T)> {
        let interval = self.intervals.get(self.next / 2)?;
        Some(if self.next % 2 == 0 {
            (EdgeKind::Start, &interval.start)
        } else {
            (EdgeKind::End, &interval.end)
        })
    }

    fn advance(&mut self) {
        self.next += 1;
    }
}

/// Removes coverage using an explicit comparator; see [`exclude`].
pub fn exclude_by<T, F>(
    to_include: Vec<Interval<T>>,
    to_exclude: Vec<Interval<T>>,
    mut compare: F,
) -> Result<Vec<Interval<T>>, SweepError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if to_include.is_empty() {
        return Ok(Vec::new());
    }

    let include = merge_by(to_include, &mut compare);
    let excl = merge_by(to_exclude, &mut compare);

    let mut include_edges = EdgeCursor::new(&include);
    let mut exclude_edges = EdgeCursor::new(&excl);

    let mut result: Vec<Interval<T>> = Vec::with_capacity(include.len() + excl.len());
    let mut state = SweepState::Outside;
    // Start point of the output run currently open, if any.
    let mut open: Option<T> = None;

    loop {
        // Pick the next edge from either stream. Ties go to the exclude
        // stream, so an exclusion touching an include boundary closes at the
        // boundary without eroding the include interval. Preserved behavior;
        // do not flip.
        let (stream, kind, point) = match (include_edges.peek(), exclude_edges.peek()) {
            (None, None) => break,
            (Some((kind, point)), None) => {
                include_edges.advance();
                (Stream::Include, kind, point)
            }
            (None, Some((kind, point))) => {
                exclude_edges.advance();
                (Stream::Exclude, kind, point)
            }
            (Some((incl_kind, incl_point)), Some((excl_kind, excl_point))) => {
                if compare(excl_point, incl_point) != Ordering::Greater {
                    exclude_edges.advance();
                    (Stream::Exclude, excl_kind, excl_point)
                } else {
                    include_edges.advance();
                    (Stream::Include, incl_kind, incl_point)
                }
            }
        };

        state = match (state, stream, kind) {
            // Entering an output-eligible run: open it at this edge.
            (SweepState::Outside, Stream::Include, EdgeKind::Start)
            | (SweepState::InBoth, Stream::Exclude, EdgeKind::End) => {
                open = Some(point.clone());
                SweepState::InIncludeOnly
            }
            // Leaving an output-eligible run: emit it unless zero-width.
            (SweepState::InIncludeOnly, Stream::Include, EdgeKind::End) => {
                close_run(&mut open, point, &mut result, &mut compare)?;
                SweepState::Outside
            }
            (SweepState::InIncludeOnly, Stream::Exclude, EdgeKind::Start) => {
                close_run(&mut open, point, &mut result, &mut compare)?;
                SweepState::InBoth
            }
            // State changes that cross no emission boundary.
            (SweepState::Outside, Stream::Exclude, EdgeKind::Start) => SweepState::InExcludeOnly,
            (SweepState::InExcludeOnly, Stream::Exclude, EdgeKind::End) => SweepState::Outside,
            (SweepState::InExcludeOnly, Stream::Include, EdgeKind::Start) => SweepState::InBoth,
            (SweepState::InBoth, Stream::Include, EdgeKind::End) => SweepState::InExcludeOnly,
            // Unreachable on canonical inputs (e.g. an end edge while outside
            // that stream's coverage).
            _ => return Err(SweepError::UnreachableState),
        };
    }

    debug_assert!(super::assertions::is_canonical_by(&result, &mut compare));
    Ok(result)
}

fn close_run<T, F>(
    open: &mut Option<T>,
    point: &T,
    result: &mut Vec<Interval<T>>,
    compare: &mut F,
) -> Result<(), SweepError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let start = open.take().ok_or(SweepError::UnreachableState)?;
    if compare(&start, point) == Ordering::Less {
        result.push(Interval::new(start, point.clone()));
    }
    Ok(())
}
