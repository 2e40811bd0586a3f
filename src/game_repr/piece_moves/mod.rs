mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use super::{Coord, Kind, PieceMoves, Position};

impl Position {
    /// Walk one ray until it leaves the board or meets an occupant.
    ///
    /// Every cell reached is added to `moves`; the first occupied cell stays
    /// only if it holds an enemy, and then also lands in `capturable`. The ray
    /// stops there either way. Returns whether that occupant is the mover's
    /// own king.
    pub(crate) fn cast_ray(
        &self,
        from: Coord,
        generated: &mut PieceMoves,
        next: impl Fn(Coord) -> Option<Coord>,
    ) -> bool {
        let mover = self.get_piece(from);
        let mut pointer = from;

        while let Some(cell) = next(pointer) {
            pointer = cell;
            generated.moves.insert(cell);
            if !self.get_square(cell).is_occupied() {
                continue;
            }

            let occupant = self.get_piece(cell);
            if mover.can_capture(occupant) {
                generated.capturable.insert(cell);
            } else {
                generated.moves.remove(cell);
            }
            return mover
                .color()
                .is_some_and(|color| occupant.is_kind(color, Kind::King));
        }

        false
    }

    /// Keep `dest` only if it is empty or holds an enemy, recording captures.
    pub(crate) fn land_on(&self, from: Coord, dest: Coord, generated: &mut PieceMoves) {
        if !self.get_square(dest).is_occupied() {
            generated.moves.insert(dest);
        } else if self.get_piece(from).can_capture(self.get_piece(dest)) {
            generated.moves.insert(dest);
            generated.capturable.insert(dest);
        }
    }
}
