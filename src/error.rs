//! Error types for rust-minimax.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: {mv} is not legal in the current state")]
    InvalidMove { mv: String },

    #[error("no moves available from the current state")]
    NoMovesAvailable,

    #[error("pop from an empty stack")]
    EmptyStack,

    #[error("search exceeded the depth limit of {limit} plies")]
    DepthLimitExceeded { limit: u32 },

    #[error("board size {size} is not supported (must be 1-{max})")]
    InvalidBoardSize { size: usize, max: usize },
}

impl Error {
    /// Build an `InvalidMove` error from any debuggable move value.
    pub fn invalid_move(mv: &impl std::fmt::Debug) -> Self {
        Error::InvalidMove {
            mv: format!("{:?}", mv),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
