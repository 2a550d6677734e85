//! Error type for board mutation and parsing

use thiserror::Error;

use crate::board::Pos;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Move is not in the legal set of the side to move
    #[error("illegal move at {pos}")]
    InvalidMove { pos: Pos },

    /// Text board layout could not be parsed
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// Square notation could not be parsed
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
}
