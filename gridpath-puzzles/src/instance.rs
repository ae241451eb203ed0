//! Puzzle instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Overlay, Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver paired with its parsed input
///
/// Manages the state for solving one puzzle input, including:
/// - The shared data (parsed input and intermediate results)
/// - Parse timing information (start and end timestamps)
pub struct PuzzleInstance<S: Solver> {
    name: &'static str,
    solver: S,
    shared: S::Shared,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: Solver> PuzzleInstance<S> {
    /// Create a new puzzle instance by parsing input
    ///
    /// Records parse timing internally.
    ///
    /// # Arguments
    /// * `name` - Display name of the puzzle
    /// * `solver` - The configured solver
    /// * `input` - The raw input string to parse
    pub fn new(name: &'static str, solver: S, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = solver.parse(input)?;
        let parse_end = Utc::now();

        log::debug!(
            "{name}: parsed input in {}µs",
            (parse_end - parse_start).num_microseconds().unwrap_or(0)
        );

        Ok(Self {
            name,
            solver,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any puzzle through dynamic dispatch
///
/// # Example
///
/// ```
/// use gridpath_puzzles::{PuzzleKind, PuzzleOptions, create};
///
/// let maze = "#####\n#..E#\n#S..#\n#####";
///
/// let mut puzzle = create(PuzzleKind::ReindeerMaze, &PuzzleOptions::default(), maze).unwrap();
/// assert_eq!(puzzle.parts(), 2);
///
/// let result = puzzle.solve(1).unwrap();
/// assert_eq!(result.answer, "1003");
/// assert!(result.duration() >= chrono::TimeDelta::zero());
/// ```
pub trait DynPuzzle {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Display name of the puzzle
    fn name(&self) -> &'static str;

    /// Get the number of parts this puzzle supports
    fn parts(&self) -> u8;

    /// The grid with one solution highlighted, if the puzzle draws one
    fn overlay(&mut self) -> Result<Option<Overlay>, SolveError>;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: Solver> DynPuzzle for PuzzleInstance<S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = self
            .solver
            .solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn overlay(&mut self) -> Result<Option<Overlay>, SolveError> {
        self.solver.overlay(&mut self.shared)
    }
}
