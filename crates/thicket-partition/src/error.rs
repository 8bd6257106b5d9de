use std::fmt;

use thicket_core::GraphError;
use thicket_planar::PlanarityError;

/// Errors that abort a thickness computation. No partial result is ever
/// returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThicknessError {
    /// The input edge list is malformed.
    InvalidGraph(GraphError),
    /// The planarity oracle reported an error for a (sub)graph.
    PlanarityTestFailed(PlanarityError),
    /// The search ran past every layer count without an answer. Partitioning
    /// into single edges always succeeds, so this is a defect.
    InvariantViolation(String),
    /// The caller's [`CancelToken`](crate::CancelToken) was triggered.
    Cancelled,
}

impl fmt::Display for ThicknessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGraph(e) => write!(f, "invalid graph: {e}"),
            Self::PlanarityTestFailed(e) => write!(f, "planarity test failed: {e}"),
            Self::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            Self::Cancelled => f.write_str("thickness computation cancelled"),
        }
    }
}

impl std::error::Error for ThicknessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGraph(e) => Some(e),
            Self::PlanarityTestFailed(e) => Some(e),
            Self::InvariantViolation(_) | Self::Cancelled => None,
        }
    }
}

impl From<GraphError> for ThicknessError {
    fn from(e: GraphError) -> Self {
        Self::InvalidGraph(e)
    }
}

impl From<PlanarityError> for ThicknessError {
    fn from(e: PlanarityError) -> Self {
        Self::PlanarityTestFailed(e)
    }
}
