//! Error types for the game engine
//!
//! Only two kinds of failure exist in the engine: invalid configuration
//! (dimensions, spawn bias, tile values, direction tokens) and running out of
//! room when spawning a tile. Everything else - empty cells, non-merging
//! neighbours, the grid boundary - is ordinary control flow.

use thiserror::Error;

/// Errors that can occur in the game engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid board dimensions, spawn bias, tile value, or direction token.
    /// These are programmer/config errors and are surfaced immediately.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// A tile spawn was requested on a board with no empty cells.
    /// Recoverable: callers check capacity (or terminal state) first.
    #[error("no empty cell left to spawn a tile")]
    OutOfSpace,
}

impl GameError {
    pub fn config(reason: impl Into<String>) -> Self {
        GameError::Configuration {
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
