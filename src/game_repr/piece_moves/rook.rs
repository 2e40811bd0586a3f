use crate::game_repr::{Coord, Direction, PieceMoves, Position};

impl Position {
    /// Rays along the four orthogonal links.
    ///
    /// Also records whether the rook's nearest occupant on any ray is its own
    /// king, which castling needs.
    pub(crate) fn rook_moves(&self, from: Coord) -> PieceMoves {
        let mut generated = PieceMoves::default();
        for direction in Direction::ALL {
            if self.cast_ray(from, &mut generated, |p| self.step(p, direction)) {
                generated.sees_king = true;
            }
        }
        generated
    }
}
