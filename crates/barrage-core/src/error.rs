use thiserror::Error;

/// Errors raised while generating or spinning a shape.
///
/// Both are precondition failures: generation is pure, so retrying the same
/// descriptor will fail the same way.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PatternError {
    /// A zero-magnitude vector has no defined rotation.
    #[error("cannot rotate zero vector")]
    ZeroVector,

    /// Per-edge counts were supplied for the wrong number of edges.
    #[error("length of per-edge counts ({actual}) should be exactly the side number ({expected})")]
    EdgeCountMismatch { expected: usize, actual: usize },
}
