//! The change-driven generation step and the stateful engine built on it.

use super::board::{Board, Bounds};
use super::change::{Change, ChangeSet};
use super::coord::{CellSet, Coord};
use super::coord_set::CoordSet;
use super::rules::evaluate_cell;

/// Affected cells per change, before dedup.
const NEIGHBORS_PER_CHANGE: usize = 8;

/// The eight cells around `coord` (fewer at the edge of the `i64` plane).
pub fn neighborhood(coord: Coord) -> CellSet {
    coord.neighbors().collect()
}

/// Every cell whose neighbor count may have moved because of `changes`.
///
/// Births and deaths count alike. Cells outside this set kept their neighbor
/// count and need no re-evaluation.
pub fn affected_cells(changes: &ChangeSet) -> CellSet {
    let capacity = changes.len().saturating_mul(NEIGHBORS_PER_CHANGE);
    let mut affected = CellSet::with_capacity_and_hasher(capacity, Default::default());
    for change in changes {
        affected.extend(change.coord.neighbors());
    }
    affected
}

/// Evaluate the rule over `affected` and keep the real transitions.
pub fn compute_changes(board: &Board, affected: &CellSet) -> ChangeSet {
    let changes = affected
        .iter()
        .filter_map(|&coord| evaluate_cell(board, coord))
        .collect();
    ChangeSet::from_unique(changes)
}

/// Advance one generation.
///
/// Applies `changes` to `board`, then evaluates only the neighborhood of those
/// same incoming changes against the updated board. Returns the new board and
/// the changes for the following generation.
pub fn step(board: Board, changes: ChangeSet) -> (Board, ChangeSet) {
    let board = board.apply_changes(&changes);
    let affected = affected_cells(&changes);
    let next = compute_changes(&board, &affected);
    (board, next)
}

/// Configuration for a DeltaLife engine instance.
///
/// Use `DeltaLifeConfig::default()` for lazily grown buffers, or pre-size them
/// via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct DeltaLifeConfig {
    /// Expected number of live cells.
    /// `None` lets the board and frontier scratch grow on demand.
    pub capacity: Option<usize>,
}

impl DeltaLifeConfig {
    /// Pre-size the board and frontier scratch for about `n` live cells.
    pub fn capacity(mut self, n: usize) -> Self {
        self.capacity = Some(n);
        self
    }
}

/// Stateful engine owning one simulation run.
///
/// Produces the same generations as chaining [`step`], but updates its board
/// in place and reuses the frontier dedup set and change buffer across
/// generations.
pub struct DeltaLife {
    board: Board,
    pending: ChangeSet,
    generation: u64,
    /// Affected-cell dedup for the step in progress.
    frontier: CoordSet,
    /// Spare change buffer swapped with `pending` each step.
    spare: Vec<Change>,
}

impl Default for DeltaLife {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaLife {
    pub fn new() -> Self {
        Self::with_config(DeltaLifeConfig::default())
    }

    /// Create an empty DeltaLife engine with explicit configuration.
    pub fn with_config(config: DeltaLifeConfig) -> Self {
        let (board, frontier) = match config.capacity {
            Some(n) => (
                Board::with_capacity(n),
                CoordSet::with_capacity(n.saturating_mul(NEIGHBORS_PER_CHANGE)),
            ),
            None => (Board::new(), CoordSet::new()),
        };
        Self {
            board,
            pending: ChangeSet::new(),
            generation: 0,
            frontier,
            spare: Vec::new(),
        }
    }

    /// Engine whose generation 0 is the given pattern.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self::from_cells_with_config(cells, DeltaLifeConfig::default())
    }

    pub fn from_cells_with_config<I>(cells: I, config: DeltaLifeConfig) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut engine = Self::with_config(config);
        engine.pending = ChangeSet::seed(cells);
        // The seed is applied like any other change set; that priming step
        // lands the pattern on the board and is not counted as a generation.
        engine.step_impl();
        engine.generation = 0;
        engine
    }

    fn step_impl(&mut self) {
        self.board.apply_in_place(&self.pending);

        self.frontier.begin_step();
        self.frontier
            .reserve_for(self.pending.len().saturating_mul(NEIGHBORS_PER_CHANGE));

        let mut next = std::mem::take(&mut self.spare);
        next.clear();
        for change in &self.pending {
            for n in change.coord.neighbors() {
                if self.frontier.insert(n) {
                    if let Some(c) = evaluate_cell(&self.board, n) {
                        next.push(c);
                    }
                }
            }
        }

        let applied = std::mem::replace(&mut self.pending, ChangeSet::from_unique(next));
        self.spare = applied.into_vec();
        self.generation += 1;
    }

    pub fn step(&mut self) {
        self.step_impl();
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step_impl();
        }
    }

    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.board.get_cell(x, y)
    }

    pub fn population(&self) -> u64 {
        self.board.population()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.board.bounds()
    }

    pub fn for_each_live<F: FnMut(i64, i64)>(&self, f: F) {
        self.board.for_each_live(f);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Changes that the next `step` will apply.
    pub fn pending_changes(&self) -> &ChangeSet {
        &self.pending
    }

    /// Number of cells evaluated by the most recent step.
    pub fn last_frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn into_parts(self) -> (Board, ChangeSet) {
        (self.board, self.pending)
    }
}
