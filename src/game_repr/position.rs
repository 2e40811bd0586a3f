use log::{debug, trace};
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::config::{EngineConfig, SelfCheckPolicy};
use crate::error::{EngineError, EngineResult};

use super::square::empty_grid;
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE, MOVE APPLICATION AND CHECK/MATE QUERIES
 */

/// 8x8 grid of piece codes, indexed `[rank][file]`; `""` marks an empty cell.
pub type Layout<'a> = [[&'a str; 8]; 8];

pub const STANDARD_LAYOUT: Layout<'static> = [
    ["wr", "wn", "wb", "wq", "wk", "wb", "wn", "wr"],
    ["wp", "wp", "wp", "wp", "wp", "wp", "wp", "wp"],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["bp", "bp", "bp", "bp", "bp", "bp", "bp", "bp"],
    ["br", "bn", "bb", "bq", "bk", "bb", "bn", "br"],
];

const BACK_RANK: [Kind; 8] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];

/// Destinations per origin cell, one entry per piece of a side
pub type MoveMap = SmallVec<[(Coord, SquareSet); 16]>;

/// Aggregates for one side, rebuilt by `update_all`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Side {
    attack_set: SquareSet,
    move_map: MoveMap,
    castles: SmallVec<[Castle; 2]>,
    /// Cleared once castling is permanently lost
    castling_live: bool,
    king: Option<Coord>,
}

impl Side {
    fn new() -> Self {
        Self {
            attack_set: SquareSet::EMPTY,
            move_map: SmallVec::new(),
            castles: SmallVec::new(),
            castling_live: true,
            king: None,
        }
    }
}

/// A complete board state.
///
/// Cells and occupants live in two flat arrays indexed by [`Coord::idx`], so
/// cloning a position is a plain copy with no pointer graph to walk. Every
/// mutation recomputes the move and attack aggregates before returning; a
/// position handed out by this module is never stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    squares: [Square; 64],
    /// Occupant lookup, kept in sync with `squares[i].is_occupied()`
    pieces: [Piece; 64],
    sides: [Side; 2],
    config: EngineConfig,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position with the default configuration
    pub fn new() -> Self {
        Self::standard_with_config(EngineConfig::default())
    }

    pub fn standard_with_config(config: EngineConfig) -> Self {
        let pieces = std::array::from_fn(|idx| {
            let coord = Coord::from_idx(idx);
            let file = coord.file as usize;
            match coord.rank {
                0 => Piece::new(Color::White, BACK_RANK[file], coord),
                1 => Piece::new(Color::White, Kind::Pawn, coord),
                6 => Piece::new(Color::Black, Kind::Pawn, coord),
                7 => Piece::new(Color::Black, BACK_RANK[file], coord),
                _ => Piece::empty(coord),
            }
        });
        Self::assemble(pieces, config)
    }

    pub fn from_layout(layout: &Layout) -> EngineResult<Self> {
        Self::from_layout_with_config(layout, EngineConfig::default())
    }

    pub fn from_layout_with_config(layout: &Layout, config: EngineConfig) -> EngineResult<Self> {
        let mut pieces: [Piece; 64] = std::array::from_fn(|idx| Piece::empty(Coord::from_idx(idx)));

        for (rank, row) in layout.iter().enumerate() {
            for (file, code) in row.iter().enumerate() {
                let coord = Coord {
                    rank: rank as u8,
                    file: file as u8,
                };
                pieces[coord.idx()] = Piece::from_code(code, coord)?;
            }
        }

        Ok(Self::assemble(pieces, config))
    }

    fn assemble(pieces: [Piece; 64], config: EngineConfig) -> Self {
        let mut squares = empty_grid();
        for (square, piece) in squares.iter_mut().zip(pieces.iter()) {
            square.set_occupied(!piece.is_empty());
        }

        let mut position = Self {
            squares,
            pieces,
            sides: [Side::new(), Side::new()],
            config,
        };
        position.update_all();
        position
    }

    /// Piece codes in the same shape `from_layout` accepts
    pub fn layout(&self) -> [[String; 8]; 8] {
        std::array::from_fn(|rank| std::array::from_fn(|file| self.pieces[rank * 8 + file].code()))
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[inline(always)]
    pub fn get_piece(&self, coord: Coord) -> &Piece {
        &self.pieces[coord.idx()]
    }

    #[inline(always)]
    pub fn get_square(&self, coord: Coord) -> &Square {
        &self.squares[coord.idx()]
    }

    /// All 64 occupants (empty sentinels included) in arena order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Follow one orthogonal link
    #[inline(always)]
    pub fn step(&self, from: Coord, direction: Direction) -> Option<Coord> {
        self.squares[from.idx()].neighbor(direction)
    }

    /// Diagonal neighbor, derived from two orthogonal hops
    #[inline]
    pub fn diagonal(&self, from: Coord, first: Direction, second: Direction) -> Option<Coord> {
        self.step(from, first).and_then(|mid| self.step(mid, second))
    }

    pub fn king_square(&self, color: Color) -> Option<Coord> {
        self.sides[color.idx()].king
    }

    /// Union of every square `color` could capture on
    pub fn attack_set(&self, color: Color) -> SquareSet {
        self.sides[color.idx()].attack_set
    }

    /// Destinations of every piece of `color`, keyed by the piece's cell
    pub fn move_map(&self, color: Color) -> &[(Coord, SquareSet)] {
        &self.sides[color.idx()].move_map
    }

    /// Castles registered by the last `update_castles(color)`
    pub fn castles(&self, color: Color) -> &[Castle] {
        &self.sides[color.idx()].castles
    }

    pub(crate) fn castling_live(&self, color: Color) -> bool {
        self.sides[color.idx()].castling_live
    }

    pub(crate) fn set_castles(&mut self, color: Color, castles: SmallVec<[Castle; 2]>) {
        self.sides[color.idx()].castles = castles;
    }

    pub(crate) fn revoke_castling(&mut self, color: Color) {
        let side = &mut self.sides[color.idx()];
        side.castles.clear();
        side.castling_live = false;
    }

    /// Recompute every piece's move set and both sides' aggregates.
    pub fn update_all(&mut self) {
        for side in self.sides.iter_mut() {
            side.attack_set = SquareSet::EMPTY;
            side.move_map.clear();
            side.king = None;
        }

        for idx in 0..64 {
            let Some(color) = self.pieces[idx].color() else {
                continue;
            };
            let coord = Coord::from_idx(idx);
            let generated = self.generate(coord);
            self.pieces[idx].set_moves(generated);

            let side = &mut self.sides[color.idx()];
            side.attack_set = side.attack_set.union(generated.capturable);
            side.move_map.push((coord, generated.moves));
            if self.pieces[idx].kind() == Some(Kind::King) && side.king.is_none() {
                side.king = Some(coord);
            }
        }

        trace!(
            "recomputed: white attacks {} cells, black attacks {} cells",
            self.sides[0].attack_set.len(),
            self.sides[1].attack_set.len()
        );
    }

    /// Pseudo-legal moves of whatever stands on `from`
    pub(crate) fn generate(&self, from: Coord) -> PieceMoves {
        match self.pieces[from.idx()].kind() {
            Some(Kind::Pawn) => self.pawn_moves(from),
            Some(Kind::Knight) => self.knight_moves(from),
            Some(Kind::Bishop) => self.bishop_moves(from),
            Some(Kind::Rook) => self.rook_moves(from),
            Some(Kind::Queen) => self.queen_moves(from),
            Some(Kind::King) => self.king_moves(from),
            None => PieceMoves::default(),
        }
    }

    /// Is the king of `color` on a square the other side can capture on?
    pub fn assess_check(&self, color: Color) -> bool {
        match self.sides[color.idx()].king {
            Some(king) => self.sides[color.opposite().idx()].attack_set.contains(king),
            None => false,
        }
    }

    /// True when no move of `color` leaves its king unattacked.
    ///
    /// That is checkmate if `color` is in check right now, stalemate otherwise.
    /// King moves are tried first since they most often escape.
    pub fn assess_checkmate(&self, color: Color) -> bool {
        let side = &self.sides[color.idx()];
        let king = side.king;

        if let Some(king) = king {
            let king_moves = side
                .move_map
                .iter()
                .find(|(origin, _)| *origin == king)
                .map(|&(_, dests)| dests)
                .unwrap_or_default();
            if king_moves.iter().any(|to| self.escapes_check(king, to, color)) {
                return false;
            }
        }

        let candidates: Vec<(Coord, Coord)> = side
            .move_map
            .iter()
            .filter(|(origin, _)| Some(*origin) != king)
            .flat_map(|&(origin, dests)| dests.iter().map(move |to| (origin, to)))
            .collect();

        let escaped = if self.config.parallel_search {
            candidates
                .par_iter()
                .any(|&(from, to)| self.escapes_check(from, to, color))
        } else {
            candidates
                .iter()
                .any(|&(from, to)| self.escapes_check(from, to, color))
        };

        if !escaped {
            debug!("{:?} has no move that leaves its king safe", color);
        }
        !escaped
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.assess_check(color) && self.assess_checkmate(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.assess_check(color) && self.assess_checkmate(color)
    }

    /// Play `from -> to` on a throwaway copy and report whether the king is safe afterwards
    fn escapes_check(&self, from: Coord, to: Coord, color: Color) -> bool {
        let mut trial = self.clone();
        trial.relocate(from, to);
        trial.update_all();
        !trial.assess_check(color)
    }

    /// Apply a move for `color`.
    ///
    /// The destination must be in the piece's move set, or, for the king, be
    /// the king destination of a castle registered by `update_castles`. On any
    /// error the position is left untouched.
    pub fn move_piece(&mut self, from: Coord, to: Coord, color: Color) -> EngineResult<()> {
        let piece = self.pieces[from.idx()];
        match piece.color() {
            None => return Err(EngineError::EmptySquare(from)),
            Some(owner) if owner != color => {
                return Err(EngineError::WrongColor {
                    at: from,
                    expected: color,
                })
            }
            Some(_) => {}
        }

        let registered = || {
            self.castles(color)
                .iter()
                .find(|castle| castle.king_to == to)
                .copied()
        };
        let castle = if piece.moves().contains(to) {
            None
        } else if let Some(castle) = registered().filter(|_| self.king_square(color) == Some(from)) {
            Some(castle)
        } else {
            debug!("rejected {} -> {} for {:?}", from, to, color);
            return Err(EngineError::IllegalMove { from, to });
        };

        if self.config.self_check == SelfCheckPolicy::Reject {
            let mut trial = self.clone();
            trial.apply(from, to, castle);
            if trial.assess_check(color) {
                debug!("rejected {} -> {}: king left in check", from, to);
                return Err(EngineError::SelfCheck { from, to });
            }
            *self = trial;
            return Ok(());
        }

        self.apply(from, to, castle);
        Ok(())
    }

    /// Relocate a piece without consulting its move set.
    ///
    /// Still promotes a pawn reaching its last rank and marks the piece as moved.
    pub fn force_move(&mut self, from: Coord, to: Coord) -> EngineResult<()> {
        if self.pieces[from.idx()].is_empty() {
            return Err(EngineError::EmptySquare(from));
        }
        if from != to {
            self.relocate(from, to);
        }
        self.refresh();
        Ok(())
    }

    fn apply(&mut self, from: Coord, to: Coord, castle: Option<Castle>) {
        if let Some(castle) = castle {
            debug!(
                "castling: rook {} -> {}, king {} -> {}",
                castle.rook_from, castle.rook_to, from, to
            );
            self.relocate(castle.rook_from, castle.rook_to);
        }
        self.relocate(from, to);
        self.refresh();
    }

    /// Move the occupant of `from` onto `to`, replacing whatever stood there.
    /// Aggregates are stale until the next `update_all`.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) {
        let mut piece = self.pieces[from.idx()];
        piece.relocate(to);
        if let Some(color) = piece.color() {
            if piece.kind() == Some(Kind::Pawn) && to.rank == color.promotion_rank() {
                piece.promote();
            }
        }

        self.pieces[to.idx()] = piece;
        self.squares[to.idx()].set_occupied(true);

        self.pieces[from.idx()] = Piece::empty(from);
        self.squares[from.idx()].set_occupied(false);
    }

    /// Castles only hold for the position they were computed on
    fn refresh(&mut self) {
        for side in self.sides.iter_mut() {
            side.castles.clear();
        }
        self.update_all();
    }
}
