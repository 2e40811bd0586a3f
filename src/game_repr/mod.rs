mod castling;
mod coord;
mod history;
mod piece;
mod piece_moves;
mod position;
mod square;
mod square_set;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use coord::*;
pub use history::*;
pub use piece::*;
pub use position::*;
pub use square::Square;
pub use square_set::*;
