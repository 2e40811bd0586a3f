use log::debug;
use smallvec::SmallVec;

use super::*;

/// A castle the king may currently perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castle {
    /// Where the king ends up, two files toward the rook
    pub king_to: Coord,
    pub rook_from: Coord,
    /// The square the king crossed
    pub rook_to: Coord,
}

impl Position {
    /// Recompute the castles `color` may perform right now.
    ///
    /// Castling is permanently lost once the king has moved or no unmoved
    /// rook remains; after that this returns immediately. While in check
    /// nothing is offered. Otherwise every unmoved rook on the king's rank that
    /// sees the king is tried by walking the king two cells toward it on a
    /// copy of the position; a rook is dropped if the king is attacked after
    /// either step.
    pub fn update_castles(&mut self, color: Color) -> &[Castle] {
        if !self.castling_live(color) {
            self.set_castles(color, SmallVec::new());
            return self.castles(color);
        }

        let rooks: SmallVec<[Coord; 4]> = self
            .pieces()
            .filter(|piece| piece.is_kind(color, Kind::Rook))
            .map(|piece| piece.square())
            .collect();

        let king = self.king_square(color).map(|at| *self.get_piece(at));
        let permanently_lost = match king {
            None => true,
            Some(king) => {
                rooks.is_empty()
                    || king.has_moved()
                    || rooks.iter().all(|&at| self.get_piece(at).has_moved())
            }
        };
        if permanently_lost {
            debug!("{:?} can no longer castle", color);
            self.revoke_castling(color);
            return self.castles(color);
        }

        let Some(king) = king else {
            return self.castles(color);
        };

        let mut found: SmallVec<[Castle; 2]> = SmallVec::new();
        if self.assess_check(color) {
            debug!("{:?} is in check, no castling this turn", color);
        } else {
            for rook_at in rooks {
                let rook = self.get_piece(rook_at);
                if rook.has_moved() || !rook.sees_king() || rook_at.rank != king.square().rank {
                    continue;
                }
                if let Some(castle) = self.castle_toward(king.square(), rook_at, color) {
                    found.push(castle);
                }
            }
        }

        self.set_castles(color, found);
        self.castles(color)
    }

    /// Walk the king two cells toward `rook_at` on a copy, one hop at a time.
    fn castle_toward(&self, king_at: Coord, rook_at: Coord, color: Color) -> Option<Castle> {
        // The king's two-cell walk must stay short of the rook
        if king_at.file.abs_diff(rook_at.file) < 3 {
            return None;
        }
        let direction = if rook_at.file > king_at.file {
            Direction::East
        } else {
            Direction::West
        };

        let mut trial = self.clone();
        let mut at = king_at;
        for _ in 0..2 {
            let next = trial.step(at, direction)?;
            trial.relocate(at, next);
            trial.update_all();
            if trial.assess_check(color) {
                debug!("{:?} castle toward {} blocked: {} is attacked", color, rook_at, next);
                return None;
            }
            at = next;
        }

        let rook_to = self.step(at, direction.opposite())?;
        Some(Castle {
            king_to: at,
            rook_from: rook_at,
            rook_to,
        })
    }
}
