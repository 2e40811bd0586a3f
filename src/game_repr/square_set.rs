use super::Coord;

/// A set of board cells, one bit per arena index.
///
/// Used for every per-piece move and capture set and for each side's attack
/// set. Being a single `u64`, copying a position copies these for free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline(always)]
    pub fn insert(&mut self, coord: Coord) {
        self.0 |= 1u64 << coord.idx();
    }

    #[inline(always)]
    pub fn remove(&mut self, coord: Coord) {
        self.0 &= !(1u64 << coord.idx());
    }

    #[inline(always)]
    pub fn contains(self, coord: Coord) -> bool {
        (self.0 & (1u64 << coord.idx())) != 0
    }

    #[inline]
    pub fn union(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    #[inline]
    pub fn is_subset(self, other: SquareSet) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Coord> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Coord;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Yields cells in arena order.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.0 == 0 {
            None
        } else {
            Some(Coord::from_idx(pop_lsb(&mut self.0)))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}

/// Pop the least significant bit and return its index
#[inline(always)]
fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}
