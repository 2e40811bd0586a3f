use once_cell::sync::Lazy;

use super::{Coord, Direction};

/// One cell of the grid.
///
/// The neighbor links are fixed when the grid is built; only the occupancy
/// flag changes as pieces move. The occupant itself lives in the position's
/// piece table at the same arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    coord: Coord,
    occupied: bool,
    links: [Option<Coord>; 4],
}

impl Square {
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Orthogonal neighbor, `None` at the board edge.
    #[inline(always)]
    pub fn neighbor(&self, direction: Direction) -> Option<Coord> {
        self.links[direction.slot()]
    }

    pub(crate) fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }
}

/// Empty grid with every link wired up, built once per process.
static EMPTY_GRID: Lazy<[Square; 64]> = Lazy::new(|| {
    let mut grid = [Square {
        coord: Coord { rank: 0, file: 0 },
        occupied: false,
        links: [None; 4],
    }; 64];

    for coord in Coord::all() {
        let square = &mut grid[coord.idx()];
        square.coord = coord;
        for direction in Direction::ALL {
            square.links[direction.slot()] = coord.offset(direction);
        }
    }

    grid
});

/// A fresh copy of the empty grid.
pub(crate) fn empty_grid() -> [Square; 64] {
    *EMPTY_GRID
}
