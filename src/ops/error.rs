use thiserror::Error;

/// Errors that can occur during the dual-edge exclusion sweep.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SweepError {
    /// The sweep observed an edge sequence that cannot arise from canonical
    /// (merged, disjoint) inputs. This signals a logic defect inside the
    /// library, not a problem with caller input.
    #[error("interval sweep reached an unreachable edge state")]
    UnreachableState,
}
