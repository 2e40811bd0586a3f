//! Turn driver for a two-player game.
//!
//! This module contains the [`Orchestrator`], which sits between an external
//! controller (whatever reads moves and draws the board) and the rules engine.
//! It owns:
//! - The live [`Position`] and whose turn it is
//! - The undo [`History`] of position snapshots
//! - The current [`TurnStatus`] (ongoing, checkmate, stalemate)
//!
//! # Example Flow
//!
//! ```text
//! [new] -> classify turn -> [play(from, to)] -> snapshot, apply, switch turn
//!   -> classify turn -> [play] ... -> Checkmate / Stalemate
//! ```
//!
//! The orchestrator does no I/O. Coordinates arrive already validated.

use log::info;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::game_repr::{Castle, Color, Coord, History, Layout, Position};

/// State of the game at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The side to move has at least one move that keeps its king safe
    Ongoing { in_check: bool },
    /// The side to move is in check and cannot escape
    Checkmate { winner: Color },
    /// The side to move is not in check but every move leaves its king attacked
    Stalemate,
}

impl TurnStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, TurnStatus::Ongoing { .. })
    }
}

/// Owns a game in progress and drives it one half-move at a time.
///
/// # Game Flow
///
/// 1. At the start of every turn, castling rights for the side to move are
///    refreshed and the position is classified into a [`TurnStatus`]
/// 2. [`play`](Orchestrator::play) snapshots the position, applies the move
///    and switches the side to move
/// 3. [`undo_move_pair`](Orchestrator::undo_move_pair) and
///    [`undo_half_move`](Orchestrator::undo_half_move) walk the snapshots back
#[derive(Debug, Clone)]
pub struct Orchestrator {
    position: Position,

    /// Snapshots taken before each applied move, newest last
    history: History,

    current_turn: Color,

    status: TurnStatus,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// Standard starting position, White to move, default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::start(Position::standard_with_config(config), Color::White, config)
    }

    /// Start from a custom layout with `first_turn` to move
    pub fn from_layout(layout: &Layout, first_turn: Color, config: EngineConfig) -> EngineResult<Self> {
        let position = Position::from_layout_with_config(layout, config)?;
        Ok(Self::start(position, first_turn, config))
    }

    fn start(position: Position, first_turn: Color, config: EngineConfig) -> Self {
        let mut orchestrator = Self {
            position,
            history: History::with_limit(config.history_limit),
            current_turn: first_turn,
            status: TurnStatus::Ongoing { in_check: false },
        };
        orchestrator.begin_turn();
        orchestrator
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn status(&self) -> TurnStatus {
        self.status
    }

    /// Castles the side to move may perform this turn
    pub fn castles(&self) -> &[Castle] {
        self.position.castles(self.current_turn)
    }

    /// Number of half-moves that can still be undone
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Apply a move for the side to move.
    ///
    /// On error the game is left exactly as it was.
    pub fn play(&mut self, from: Coord, to: Coord) -> EngineResult<TurnStatus> {
        if self.status.is_over() {
            return Err(EngineError::GameOver(self.status));
        }

        let before = self.position.clone();
        self.position.move_piece(from, to, self.current_turn)?;
        self.history.push(before);

        self.current_turn = self.current_turn.opposite();
        Ok(self.begin_turn())
    }

    /// Take back the last half-move; the other side is to move again.
    pub fn undo_half_move(&mut self) -> EngineResult<TurnStatus> {
        self.history.undo(&mut self.position)?;
        self.current_turn = self.current_turn.opposite();
        Ok(self.begin_turn())
    }

    /// Take back the opponent's reply and the current side's previous move.
    ///
    /// Fails without changing anything when fewer than two half-moves are
    /// available.
    pub fn undo_move_pair(&mut self) -> EngineResult<TurnStatus> {
        if self.history.len() < 2 {
            return Err(EngineError::NothingToUndo);
        }
        self.history.undo(&mut self.position)?;
        self.history.undo(&mut self.position)?;
        Ok(self.begin_turn())
    }

    /// Refresh castling for the side to move and classify the position.
    fn begin_turn(&mut self) -> TurnStatus {
        let color = self.current_turn;
        self.position.update_castles(color);

        let in_check = self.position.assess_check(color);
        let king_taken = self.position.king_square(color).is_none()
            && self.position.king_square(color.opposite()).is_some();

        let status = if king_taken {
            let winner = color.opposite();
            info!("{:?} king was captured, {:?} wins", color, winner);
            TurnStatus::Checkmate { winner }
        } else if !self.position.assess_checkmate(color) {
            TurnStatus::Ongoing { in_check }
        } else if in_check {
            let winner = color.opposite();
            info!("Checkmate! {:?} wins", winner);
            TurnStatus::Checkmate { winner }
        } else {
            info!("Stalemate! Game is a draw");
            TurnStatus::Stalemate
        };

        self.status = status;
        status
    }
}
