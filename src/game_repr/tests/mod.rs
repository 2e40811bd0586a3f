use super::*;
use crate::config::{EngineConfig, SelfCheckPolicy};
use crate::error::EngineError;

// ==================== HELPER FUNCTIONS ====================

/// Shorthand for a coordinate
pub fn c(rank: u8, file: u8) -> Coord {
    Coord { rank, file }
}

/// Build a position holding only the given pieces
pub fn board(placements: &[(&'static str, Coord)]) -> Position {
    board_with_config(placements, EngineConfig::default())
}

pub fn board_with_config(placements: &[(&'static str, Coord)], config: EngineConfig) -> Position {
    let mut layout: Layout = [[""; 8]; 8];
    for &(code, at) in placements {
        layout[at.rank as usize][at.file as usize] = code;
    }
    Position::from_layout_with_config(&layout, config).expect("test layout should parse")
}

/// Helper function to check if a piece may move to a square
pub fn has_move(pos: &Position, from: Coord, to: Coord) -> bool {
    pos.get_piece(from).moves().contains(to)
}

/// Sorted destinations of the piece on `from`
pub fn moves_of(pos: &Position, from: Coord) -> Vec<Coord> {
    pos.get_piece(from).moves().iter().collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== TEST MODULES ====================

mod castling;
mod stalemate;
