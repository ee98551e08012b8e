//! DeltaLife engine internals and public API.
//!
//! The board is a sparse set of live coordinates. Each generation applies the
//! previous generation's changes and re-evaluates only the 8-neighborhood of
//! those changes, so the cost of a step follows activity rather than area.

mod board;
mod change;
mod coord;
mod coord_set;
mod engine;
mod rules;

pub use board::{Board, Bounds};
pub use change::{Change, ChangeSet, Disposition};
pub use coord::{CellSet, Coord, CoordBuildHasher, CoordHasher};
pub use engine::{
    DeltaLife, DeltaLifeConfig, affected_cells, compute_changes, neighborhood, step,
};
pub use rules::{evaluate_cell, live_neighbor_count, next_state};
