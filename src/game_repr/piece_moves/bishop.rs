use crate::game_repr::{Coord, Direction, PieceMoves, Position};

impl Position {
    /// Rays along the four diagonals. Each step is two orthogonal hops, so a
    /// ray ends as soon as either hop falls off the board.
    pub(crate) fn bishop_moves(&self, from: Coord) -> PieceMoves {
        let mut generated = PieceMoves::default();
        for (first, second) in Direction::DIAGONALS {
            self.cast_ray(from, &mut generated, |p| self.diagonal(p, first, second));
        }
        generated
    }
}
