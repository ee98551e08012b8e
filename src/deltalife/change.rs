//! Cell transitions and the per-generation change set.

use std::collections::HashMap;

use super::coord::{CellSet, Coord, CoordBuildHasher};

/// What a change does to its coordinate when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    Live,
    Die,
}

/// An instruction to move one cell to a state at the next generation
/// boundary. It says nothing about the cell's current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Change {
    pub coord: Coord,
    pub disposition: Disposition,
}

impl Change {
    pub const fn live(coord: Coord) -> Self {
        Self {
            coord,
            disposition: Disposition::Live,
        }
    }

    pub const fn die(coord: Coord) -> Self {
        Self {
            coord,
            disposition: Disposition::Die,
        }
    }

    #[inline]
    pub fn is_birth(&self) -> bool {
        self.disposition == Disposition::Live
    }
}

/// The changes to apply at the start of the next generation.
///
/// Holds at most one change per coordinate. Iteration order carries no
/// meaning.
#[derive(Clone, Debug, Default)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every distinct coordinate wrapped as a birth.
    pub fn births<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut seen = CellSet::default();
        let changes = cells
            .into_iter()
            .map(Into::into)
            .filter(|&c| seen.insert(c))
            .map(Change::live)
            .collect();
        Self { changes }
    }

    /// Births for the pattern plus a death for every neighbor outside it.
    ///
    /// The deaths are no-ops on an empty board but put the pattern cells into
    /// the first affected set, so isolated seed cells get evaluated too.
    pub fn seed<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut set = Self::births(cells);
        let pattern: CellSet = set.changes.iter().map(|c| c.coord).collect();
        let mut padding = CellSet::default();
        let born = set.changes.len();
        for i in 0..born {
            let coord = set.changes[i].coord;
            for n in coord.neighbors() {
                if !pattern.contains(&n) && padding.insert(n) {
                    set.changes.push(Change::die(n));
                }
            }
        }
        set
    }

    /// Build a change set from arbitrary changes. When a coordinate appears
    /// more than once the last instruction for it wins.
    pub fn from_changes<I>(changes: I) -> Self
    where
        I: IntoIterator<Item = Change>,
    {
        let mut slot: HashMap<Coord, usize, CoordBuildHasher> = HashMap::default();
        let mut out: Vec<Change> = Vec::new();
        for change in changes {
            match slot.get(&change.coord) {
                Some(&i) => out[i] = change,
                None => {
                    slot.insert(change.coord, out.len());
                    out.push(change);
                }
            }
        }
        Self { changes: out }
    }

    /// Wrap changes already known to name each coordinate once.
    pub(crate) fn from_unique(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    pub fn births_iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.changes.iter().filter(|c| c.is_birth()).map(|c| c.coord)
    }

    pub fn deaths_iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.changes.iter().filter(|c| !c.is_birth()).map(|c| c.coord)
    }

    pub fn into_vec(self) -> Vec<Change> {
        self.changes
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl IntoIterator for ChangeSet {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}
