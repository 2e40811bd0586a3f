use crate::game_repr::{Coord, Direction, PieceMoves, Position};

impl Position {
    /// The eight surrounding cells. Castling is registered separately by
    /// `update_castles`, never here.
    pub(crate) fn king_moves(&self, from: Coord) -> PieceMoves {
        let mut generated = PieceMoves::default();

        let orthogonal = Direction::ALL.iter().map(|&d| self.step(from, d));
        let diagonal = Direction::DIAGONALS
            .iter()
            .map(|&(first, second)| self.diagonal(from, first, second));

        for dest in orthogonal.chain(diagonal).flatten() {
            self.land_on(from, dest, &mut generated);
        }

        generated
    }
}
