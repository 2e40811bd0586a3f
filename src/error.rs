//! Error types for the rules engine
//!
//! Every error is local to the call that produced it: the position is left
//! exactly as it was and the caller decides whether to retry.

use crate::game_repr::{Color, Coord};
use crate::orchestrator::TurnStatus;

/// Errors that can occur while building or mutating a position
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A layout contained a piece code that is not `<color><kind>`
    #[error("invalid piece spec {code:?}: {reason}")]
    InvalidPieceSpec { code: String, reason: &'static str },

    /// Destination is neither in the piece's move set nor a registered castle
    #[error("invalid move: {from} -> {to}")]
    IllegalMove { from: Coord, to: Coord },

    /// Move would leave the mover's own king attacked (only under `SelfCheckPolicy::Reject`)
    #[error("move {from} -> {to} leaves the king in check")]
    SelfCheck { from: Coord, to: Coord },

    /// Origin cell holds no piece
    #[error("there is no piece at {0}")]
    EmptySquare(Coord),

    /// Origin piece belongs to the other side
    #[error("piece at {at} does not belong to {expected:?}")]
    WrongColor { at: Coord, expected: Color },

    /// Undo requested with no snapshot left
    #[error("there are no more moves to undo")]
    NothingToUndo,

    /// A move was attempted after checkmate or stalemate
    #[error("game is already over: {0:?}")]
    GameOver(TurnStatus),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
