//! Grid puzzles solved with the `gridpath` search engine
//!
//! Each puzzle implements [`PuzzleParser`], one [`PartSolver`] per part and
//! [`Solver`] to dispatch between them. [`create`] builds a type-erased
//! [`DynPuzzle`] from a [`PuzzleKind`] and raw input, timing the parse and
//! every solve.
//!
//! Puzzles included:
//! - [`PuzzleKind::ReindeerMaze`]: cheapest walk through a maze where turns
//!   cost a thousand steps, and how many tiles any cheapest walk touches
//! - [`PuzzleKind::RamRun`]: shortest escape from a memory space filling up
//!   with fallen bytes, and the first byte that cuts it off
//! - [`PuzzleKind::WeightedGrid`]: cheapest walk over cells with entry costs,
//!   and how many distinct cheapest walks exist

mod catalog;
mod error;
mod instance;
mod markers;
mod ram_run;
mod reindeer_maze;
mod solver;
mod weighted_grid;

pub use catalog::{PuzzleKind, PuzzleOptions, UnknownPuzzle, create};
pub use error::{ParseError, PuzzleError, SolveError};
pub use instance::{DynPuzzle, PuzzleInstance, SolveResult};
pub use ram_run::{DEFAULT_FALLEN_BYTES, DEFAULT_MEMORY_SIZE, RamRun};
pub use reindeer_maze::{Maze, ReindeerMaze};
pub use solver::{Overlay, PartSolver, PuzzleParser, Solver, SolverExt};
pub use weighted_grid::{Terrain, WeightedGrid};
