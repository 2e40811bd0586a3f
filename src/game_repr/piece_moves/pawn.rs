use crate::game_repr::{Color, Coord, Direction, PieceMoves, Position};

impl Position {
    // No en passant.
    pub(crate) fn pawn_moves(&self, from: Coord) -> PieceMoves {
        let mut generated = PieceMoves::default();
        let pawn = self.get_piece(from);
        let forward = match pawn.color() {
            Some(Color::White) => Direction::North,
            Some(Color::Black) => Direction::South,
            None => return generated,
        };

        let Some(one) = self.step(from, forward) else {
            return generated;
        };

        if !self.get_square(one).is_occupied() {
            generated.moves.insert(one);
            if !pawn.has_moved() {
                if let Some(two) = self.step(one, forward) {
                    if !self.get_square(two).is_occupied() {
                        generated.moves.insert(two);
                    }
                }
            }
        }

        // Diagonals only when there is something to take
        for side in [Direction::West, Direction::East] {
            let Some(diag) = self.step(one, side) else {
                continue;
            };
            if self.get_square(diag).is_occupied() && pawn.can_capture(self.get_piece(diag)) {
                generated.moves.insert(diag);
                generated.capturable.insert(diag);
            }
        }

        generated
    }
}
