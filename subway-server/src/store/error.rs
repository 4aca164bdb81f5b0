//! Store error types.

use crate::domain::{LineId, StationId};

/// Errors from the in-memory stores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No station with the given id.
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line with the given id (or the line was deleted).
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// A line with the same name already exists.
    #[error("line name {0:?} is already taken")]
    DuplicateLineName(String),
}
