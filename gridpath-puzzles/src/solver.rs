//! Core solver traits and related types

use std::collections::BTreeSet;

use crate::error::{ParseError, SolveError};
use gridpath::{Grid, Position};

/// Trait for parsing puzzle input into shared data
///
/// Parsing takes `&self` so that a solver can carry its own settings (grid
/// size, how much input to use) into the parse.
///
/// # Example
///
/// ```
/// use gridpath_puzzles::{ParseError, PuzzleParser};
///
/// struct Sum;
///
/// impl PuzzleParser for Sum {
///     type Shared = Vec<u64>;
///
///     fn parse(&self, input: &str) -> Result<Self::Shared, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Sum.parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait PuzzleParser {
    /// The shared data structure that holds parsed input and intermediate results.
    type Shared;

    /// Parse the input string into the shared data structure.
    fn parse(&self, input: &str) -> Result<Self::Shared, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` represents the part number (1, 2, etc.).
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data, so a part can store
    ///   results another part reuses
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(&self, shared: &mut Self::Shared) -> Result<String, SolveError>;
}

/// Core trait that all puzzle solvers implement.
///
/// Extends `PuzzleParser` to inherit the `Shared` type and `parse()`.
/// Solvers usually dispatch to their [`PartSolver`] impls:
///
/// ```
/// use gridpath_puzzles::{ParseError, PartSolver, PuzzleParser, SolveError, Solver};
///
/// struct Numbers;
///
/// impl PuzzleParser for Numbers {
///     type Shared = Vec<i64>;
///
///     fn parse(&self, input: &str) -> Result<Self::Shared, ParseError> {
///         input
///             .split_whitespace()
///             .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Numbers {
///     fn solve(&self, shared: &mut Vec<i64>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Numbers {
///     fn solve(&self, shared: &mut Vec<i64>) -> Result<String, SolveError> {
///         Ok(shared.iter().product::<i64>().to_string())
///     }
/// }
///
/// impl Solver for Numbers {
///     const PARTS: u8 = 2;
///
///     fn solve_part(&self, shared: &mut Vec<i64>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => PartSolver::<1>::solve(self, shared),
///             2 => PartSolver::<2>::solve(self, shared),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
///
/// let mut shared = Numbers.parse("2 3 4").unwrap();
/// assert_eq!(Numbers.solve_part(&mut shared, 2).unwrap(), "24");
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    fn solve_part(&self, shared: &mut Self::Shared, part: u8) -> Result<String, SolveError>;

    /// The puzzle grid with the cells of a solution marked, if the solver
    /// has something to show
    fn overlay(&self, _shared: &mut Self::Shared) -> Result<Option<Overlay>, SolveError> {
        Ok(None)
    }
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        &self,
        shared: &mut Self::Shared,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            self.solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

/// A grid with a set of highlighted cells, for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub grid: Grid<char>,
    pub highlighted: BTreeSet<Position>,
}
