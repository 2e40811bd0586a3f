use crate::game_repr::{Coord, Direction, PieceMoves, Position};

impl Position {
    /// Two hops one way, then one hop to either side.
    pub(crate) fn knight_moves(&self, from: Coord) -> PieceMoves {
        let mut generated = PieceMoves::default();

        for long in Direction::ALL {
            let Some(pivot) = self.step(from, long).and_then(|mid| self.step(mid, long)) else {
                continue;
            };
            for side in long.perpendicular() {
                if let Some(dest) = self.step(pivot, side) {
                    self.land_on(from, dest, &mut generated);
                }
            }
        }

        generated
    }
}
