//! Sparse, change-driven Conway's Game of Life engine (B3/S23).

pub mod deltalife;
pub mod error;
pub mod harness;
pub mod patterns;
pub mod render;
pub mod rle;

pub use deltalife::{Board, Change, ChangeSet, Coord, DeltaLife, DeltaLifeConfig, Disposition};
pub use error::{HarnessError, RleError};
