use crate::game_repr::{Coord, PieceMoves, Position};

impl Position {
    pub(crate) fn queen_moves(&self, from: Coord) -> PieceMoves {
        let straight = self.rook_moves(from);
        let diagonal = self.bishop_moves(from);
        PieceMoves {
            moves: straight.moves.union(diagonal.moves),
            capturable: straight.capturable.union(diagonal.capturable),
            sees_king: false,
        }
    }
}
