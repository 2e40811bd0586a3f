use crate::error::{EngineError, EngineResult};

use super::{Coord, SquareSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Kind {
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Kind::King),
            'q' => Some(Kind::Queen),
            'r' => Some(Kind::Rook),
            'b' => Some(Kind::Bishop),
            'n' => Some(Kind::Knight),
            'p' => Some(Kind::Pawn),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Kind::King => 'k',
            Kind::Queen => 'q',
            Kind::Rook => 'r',
            Kind::Bishop => 'b',
            Kind::Knight => 'n',
            Kind::Pawn => 'p',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Index into per-side tables
    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank a pawn of this color promotes on
    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Moves a piece generator produced for one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceMoves {
    pub moves: SquareSet,
    pub capturable: SquareSet,
    pub sees_king: bool,
}

/// Occupant of a cell.
///
/// An unoccupied cell still holds a piece: the empty sentinel, whose identity
/// is `None`. `moves` and `capturable` are rebuilt from scratch on every
/// recompute; `capturable` is always a subset of `moves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    identity: Option<(Color, Kind)>,
    square: Coord,
    has_moved: bool,
    moves: SquareSet,
    capturable: SquareSet,
    sees_king: bool,
}

impl Piece {
    pub fn new(color: Color, kind: Kind, square: Coord) -> Self {
        Self {
            identity: Some((color, kind)),
            square,
            has_moved: false,
            moves: SquareSet::EMPTY,
            capturable: SquareSet::EMPTY,
            sees_king: false,
        }
    }

    /// The sentinel stored in every unoccupied cell
    pub fn empty(square: Coord) -> Self {
        Self {
            identity: None,
            square,
            has_moved: false,
            moves: SquareSet::EMPTY,
            capturable: SquareSet::EMPTY,
            sees_king: false,
        }
    }

    /// Parse a two-letter piece code (`"wr"`, `"bp"`, ...). `""` is the empty sentinel.
    pub fn from_code(code: &str, square: Coord) -> EngineResult<Self> {
        let mut chars = code.chars();
        let (color, kind) = match (chars.next(), chars.next(), chars.next()) {
            (None, _, _) => return Ok(Self::empty(square)),
            (Some(color), Some(kind), None) => (color, kind),
            _ => {
                return Err(EngineError::InvalidPieceSpec {
                    code: code.to_string(),
                    reason: "expected a color letter followed by a kind letter",
                })
            }
        };

        let color = Color::from_code(color).ok_or_else(|| EngineError::InvalidPieceSpec {
            code: code.to_string(),
            reason: "color must be 'w' or 'b'",
        })?;
        let kind = Kind::from_code(kind).ok_or_else(|| EngineError::InvalidPieceSpec {
            code: code.to_string(),
            reason: "kind must be one of 'k', 'q', 'r', 'b', 'n', 'p'",
        })?;

        Ok(Self::new(color, kind, square))
    }

    /// Two-letter code, `""` for the empty sentinel
    pub fn code(&self) -> String {
        match self.identity {
            Some((color, kind)) => [color.code(), kind.code()].iter().collect(),
            None => String::new(),
        }
    }

    /// Unicode glyph for display, `None` for the empty sentinel
    pub fn symbol(&self) -> Option<char> {
        let (color, kind) = self.identity?;
        Some(match (color, kind) {
            (Color::White, Kind::King) => '♔',
            (Color::White, Kind::Queen) => '♕',
            (Color::White, Kind::Rook) => '♖',
            (Color::White, Kind::Bishop) => '♗',
            (Color::White, Kind::Knight) => '♘',
            (Color::White, Kind::Pawn) => '♙',
            (Color::Black, Kind::King) => '♚',
            (Color::Black, Kind::Queen) => '♛',
            (Color::Black, Kind::Rook) => '♜',
            (Color::Black, Kind::Bishop) => '♝',
            (Color::Black, Kind::Knight) => '♞',
            (Color::Black, Kind::Pawn) => '♟',
        })
    }

    pub fn is_empty(&self) -> bool {
        self.identity.is_none()
    }

    pub fn color(&self) -> Option<Color> {
        self.identity.map(|(color, _)| color)
    }

    pub fn kind(&self) -> Option<Kind> {
        self.identity.map(|(_, kind)| kind)
    }

    pub fn is(&self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn is_kind(&self, color: Color, kind: Kind) -> bool {
        self.identity == Some((color, kind))
    }

    /// Can this piece capture `other`? Only pieces of opposite colors can.
    pub fn can_capture(&self, other: &Piece) -> bool {
        match (self.color(), other.color()) {
            (Some(mine), Some(theirs)) => mine != theirs,
            _ => false,
        }
    }

    /// The cell this piece stands on
    pub fn square(&self) -> Coord {
        self.square
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn moves(&self) -> SquareSet {
        self.moves
    }

    pub fn capturable(&self) -> SquareSet {
        self.capturable
    }

    /// Rooks only: nearest occupant on one of the rook's rays is its own king
    pub fn sees_king(&self) -> bool {
        self.sees_king
    }

    pub(crate) fn set_moves(&mut self, generated: PieceMoves) {
        self.moves = generated.moves;
        self.capturable = generated.capturable;
        self.sees_king = generated.sees_king;
    }

    pub(crate) fn relocate(&mut self, square: Coord) {
        self.square = square;
        self.has_moved = true;
    }

    pub(crate) fn promote(&mut self) {
        if let Some((color, Kind::Pawn)) = self.identity {
            self.identity = Some((color, Kind::Queen));
        }
    }
}
