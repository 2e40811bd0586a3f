//! Chess rules engine: board state, per-piece move generation, check,
//! checkmate and stalemate detection, castling and snapshot undo.
//!
//! The engine does no I/O. A controller hands it validated coordinates and
//! reads display-ready state back.

pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use config::{EngineConfig, SelfCheckPolicy};
pub use error::{EngineError, EngineResult};
pub use orchestrator::{Orchestrator, TurnStatus};
