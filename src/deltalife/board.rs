//! The alive set.

use super::change::{ChangeSet, Disposition};
use super::coord::{CellSet, Coord};

/// Inclusive bounding box of the live cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Cell count along x, saturating for a box spanning the whole `i64` range.
    pub fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x).saturating_add(1)
    }

    pub fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y).saturating_add(1)
    }
}

/// Every currently live cell. This is the whole durable state of a
/// simulation between generations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    alive: CellSet,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            alive: CellSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self {
            alive: cells.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.alive.contains(&coord)
    }

    #[inline]
    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.contains(Coord::new(x, y))
    }

    /// Apply a change set: `(alive ∪ births) \ deaths`.
    ///
    /// The board is consumed and updated in place; the pre-application set is
    /// not observable afterwards. A change set never names a coordinate twice,
    /// so the order of union and difference does not matter.
    pub fn apply_changes(mut self, changes: &ChangeSet) -> Self {
        self.apply_in_place(changes);
        self
    }

    pub(crate) fn apply_in_place(&mut self, changes: &ChangeSet) {
        self.alive.reserve(changes.len());
        for change in changes {
            match change.disposition {
                Disposition::Live => {
                    self.alive.insert(change.coord);
                }
                Disposition::Die => {
                    self.alive.remove(&change.coord);
                }
            }
        }
    }

    pub fn population(&self) -> u64 {
        self.alive.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.alive.iter();
        let first = cells.next()?;
        let mut b = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for c in cells {
            b.min_x = b.min_x.min(c.x);
            b.min_y = b.min_y.min(c.y);
            b.max_x = b.max_x.max(c.x);
            b.max_y = b.max_y.max(c.y);
        }
        Some(b)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.alive.iter().copied()
    }

    pub fn for_each_live<F: FnMut(i64, i64)>(&self, mut f: F) {
        for c in &self.alive {
            f(c.x, c.y);
        }
    }

    /// Live cells sorted by `(x, y)`; a canonical form for comparing runs.
    pub fn sorted_cells(&self) -> Vec<(i64, i64)> {
        let mut cells: Vec<(i64, i64)> = self.alive.iter().map(|&c| c.into()).collect();
        cells.sort_unstable();
        cells
    }
}
