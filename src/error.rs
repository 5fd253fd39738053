use std::io;

pub type AcoResult<T> = Result<T, AcoError>;

/// Errors raised while building a cost model or running a colony.
#[derive(Debug, thiserror::Error)]
pub enum AcoError {
    /// Malformed problem data or out-of-range parameters. Raised before any
    /// simulation work starts.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The selection weights over the remaining nodes summed to zero (or
    /// overflowed), so the next node cannot be drawn.
    #[error("degenerate selection weights at node {node} with {remaining} candidates left")]
    DegenerateSampling { node: usize, remaining: usize },

    #[error("failed to read city file: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl AcoError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AcoError::InvalidInput {
            reason: reason.into(),
        }
    }
}
