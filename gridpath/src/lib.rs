//! Grid Path Search Library
//!
//! A best-first (A*) search engine for small grid-shaped search spaces that
//! keeps track of *all* optimal paths, plus the grid and position toolkit
//! puzzle solvers build their successor functions from.
//!
//! # Overview
//!
//! This library provides:
//! - [`Grid`]: owned row-major cell storage with bounds checks and adjacency
//! - [`Position`], [`Direction`] and [`manhattan`] for grid geometry
//! - [`SearchNode`], [`Node`] and [`NodeKey`]: statically typed search states
//!   with a canonical key
//! - [`astar`] / [`search`]: the search engine, returning a [`SearchResult`]
//!   that reconstructs one optimal path, every optimal path, or the set of
//!   positions on any optimal path
//!
//! The engine is pure: it performs no I/O, holds no state between calls and
//! never mutates caller data.
//!
//! # Quick Example
//!
//! ```
//! use gridpath::{manhattan, search, Goal, Grid, Position, Scored};
//!
//! let grid = Grid::parse_chars("S..\n.#.\n..E").unwrap();
//! let start = grid.find(|&c| c == 'S').unwrap();
//! let end = grid.find(|&c| c == 'E').unwrap();
//!
//! let result = search(
//!     start,
//!     Goal::Position(end),
//!     |current: &Scored<Position>| {
//!         grid.neighbors(current.node)
//!             .filter(|p| grid.get(*p) != Some(&'#'))
//!             .map(|p| Scored::new(p, current.score + 1))
//!             .collect()
//!     },
//!     |p: &Position| manhattan(*p, end),
//! )
//! .unwrap();
//!
//! assert_eq!(result.min_score(), 4);
//! assert_eq!(result.best_path().first(), Some(&start));
//! assert_eq!(result.best_path().last(), Some(&end));
//! assert_eq!(result.optimal_positions().len(), 8);
//! ```

mod error;
mod grid;
mod node;
mod position;
mod search;

pub use error::{GridError, SearchError};
pub use grid::Grid;
pub use node::{AuxState, Node, NodeKey, Scored, SearchNode};
pub use position::{Direction, Position, RelativeTurn, manhattan};
pub use search::{ClosureProblem, Goal, SearchProblem, SearchResult, astar, search};
