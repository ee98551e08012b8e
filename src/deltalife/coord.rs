//! Cell coordinates and the hashing shared by every coordinate set.

use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};

/// Two distinct Fibonacci-derived constants for mixing x and y independently.
/// A single-constant sequential hash collides systematically on
/// grid-aligned coordinate patterns such as rows and diagonals.
const MX: u64 = 0x517c_c1b7_2722_0a95;
const MY: u64 = 0x6c62_272e_07bb_0142;

/// Offsets of the eight cells at unit Chebyshev distance.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline(always)]
pub(crate) fn coord_hash(x: i64, y: i64) -> u64 {
    // Rotate y's lane so both axes contribute entropy to low bucket bits.
    (x as u64).wrapping_mul(MX) ^ (y as u64).wrapping_mul(MY).rotate_right(31)
}

/// A cell position on the unbounded plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The coordinate at `(x + dx, y + dy)`, or `None` when it falls outside
    /// the `i64` plane.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The (up to) eight neighbors of this cell.
    ///
    /// Neighbors that would lie beyond `i64::MIN`/`i64::MAX` are omitted, so
    /// the edge of the representable plane acts as a permanently dead border.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    #[inline]
    pub fn is_neighbor_of(self, other: Coord) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl Hash for Coord {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(coord_hash(self.x, self.y));
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i64, i64) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pass-through hasher for keys that already hash themselves with
/// [`coord_hash`].
///
/// `Coord` feeds a single premixed `u64`; anything else falls back to a
/// byte-wise multiply fold.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoordHasher {
    hash: u64,
}

impl Hasher for CoordHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash = (self.hash.rotate_left(5) ^ b as u64).wrapping_mul(MX);
        }
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.hash = self.hash.rotate_left(32) ^ value;
    }
}

pub type CoordBuildHasher = BuildHasherDefault<CoordHasher>;

/// A set of coordinates using the coordinate hash.
pub type CellSet = HashSet<Coord, CoordBuildHasher>;

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, Hash, Hasher};

    use super::{CellSet, Coord, CoordBuildHasher};

    #[test]
    fn neighbors_of_origin() {
        let got: CellSet = Coord::new(0, 0).neighbors().collect();
        let expected: CellSet = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ]
        .into_iter()
        .map(Coord::from)
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn neighbors_shift_with_coordinate() {
        let base: CellSet = Coord::new(0, 0).neighbors().collect();
        let shifted: CellSet = Coord::new(1, 1).neighbors().collect();
        let expected: CellSet = base
            .iter()
            .map(|c| Coord::new(c.x + 1, c.y + 1))
            .collect();
        assert_eq!(shifted, expected);
    }

    #[test]
    fn neighbors_clip_at_plane_edge() {
        let corner = Coord::new(i64::MAX, i64::MIN);
        let got: Vec<Coord> = corner.neighbors().collect();
        assert_eq!(got.len(), 3);
        assert!(got.contains(&Coord::new(i64::MAX - 1, i64::MIN)));
        assert!(got.contains(&Coord::new(i64::MAX, i64::MIN + 1)));
        assert!(got.contains(&Coord::new(i64::MAX - 1, i64::MIN + 1)));

        let edge = Coord::new(0, i64::MAX);
        assert_eq!(edge.neighbors().count(), 5);
    }

    #[test]
    fn hash_is_structural() {
        let build = CoordBuildHasher::default();
        let hash_of = |c: Coord| {
            let mut h = build.build_hasher();
            c.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash_of(Coord::new(3, -7)), hash_of(Coord::new(3, -7)));
        assert_ne!(hash_of(Coord::new(3, -7)), hash_of(Coord::new(-7, 3)));
        assert_ne!(hash_of(Coord::new(1, 0)), hash_of(Coord::new(0, 1)));
    }

    #[test]
    fn adjacency_check() {
        let c = Coord::new(5, 5);
        assert!(c.is_neighbor_of(Coord::new(4, 6)));
        assert!(!c.is_neighbor_of(c));
        assert!(!c.is_neighbor_of(Coord::new(7, 5)));
    }
}
