use std::fmt;

/// A cell address on the 8x8 grid.
///
/// Rank 0 is White's back rank, rank 7 is Black's. Files run 0..=7 from the
/// queen's side to the king's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub rank: u8,
    pub file: u8,
}

impl Coord {
    /// Create a coordinate, or `None` when either component is off the board.
    pub fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// Index into the flat 64-cell arena (`rank * 8 + file`).
    #[inline(always)]
    pub fn idx(self) -> usize {
        debug_assert!(self.rank < 8 && self.file < 8, "off-board coordinate {}", self);
        self.rank as usize * 8 + self.file as usize
    }

    /// Inverse of [`Coord::idx`]. `idx` must be below 64.
    #[inline(always)]
    pub fn from_idx(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Self {
            rank: (idx / 8) as u8,
            file: (idx % 8) as u8,
        }
    }

    /// All 64 cells in arena order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_idx)
    }

    /// Neighbor one step away, ignoring the board's link table.
    /// Only used to build the link table itself.
    pub(crate) fn offset(self, direction: Direction) -> Option<Coord> {
        let (dr, df) = direction.delta();
        let rank = self.rank as i8 + dr;
        let file = self.file as i8 + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Coord {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}

/// The four orthogonal links every cell carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward rank 7
    North,
    /// Toward rank 0
    South,
    /// Toward file 7
    East,
    /// Toward file 0
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Diagonals as two orthogonal hops: the first hop, then the second.
    pub const DIAGONALS: [(Direction, Direction); 4] = [
        (Direction::West, Direction::North),
        (Direction::East, Direction::North),
        (Direction::West, Direction::South),
        (Direction::East, Direction::South),
    ];

    #[inline(always)]
    pub(crate) fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The two directions perpendicular to this one.
    pub fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::West, Direction::East],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}
