//! The puzzles this crate knows how to build

use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::instance::{DynPuzzle, PuzzleInstance};
use crate::ram_run::{DEFAULT_FALLEN_BYTES, DEFAULT_MEMORY_SIZE, RamRun};
use crate::reindeer_maze::ReindeerMaze;
use crate::weighted_grid::WeightedGrid;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    ReindeerMaze,
    RamRun,
    WeightedGrid,
}

impl PuzzleKind {
    pub const ALL: [PuzzleKind; 3] = [
        PuzzleKind::ReindeerMaze,
        PuzzleKind::RamRun,
        PuzzleKind::WeightedGrid,
    ];

    /// Name used on the command line and in output
    pub fn name(self) -> &'static str {
        match self {
            PuzzleKind::ReindeerMaze => "reindeer-maze",
            PuzzleKind::RamRun => "ram-run",
            PuzzleKind::WeightedGrid => "weighted-grid",
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown puzzle {given:?} (expected one of: {expected})")]
pub struct UnknownPuzzle {
    given: String,
    expected: String,
}

impl FromStr for PuzzleKind {
    type Err = UnknownPuzzle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PuzzleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownPuzzle {
                given: s.to_string(),
                expected: PuzzleKind::ALL.iter().join(", "),
            })
    }
}

/// Settings that only some puzzles read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleOptions {
    /// Side length of the RAM run memory space
    pub memory_size: usize,
    /// How many bytes have fallen for RAM run part 1
    pub fallen_bytes: usize,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        Self {
            memory_size: DEFAULT_MEMORY_SIZE,
            fallen_bytes: DEFAULT_FALLEN_BYTES,
        }
    }
}

/// Parse `input` for the given puzzle and return it ready to solve
pub fn create(
    kind: PuzzleKind,
    options: &PuzzleOptions,
    input: &str,
) -> Result<Box<dyn DynPuzzle>, PuzzleError> {
    log::info!("parsing {} input ({} bytes)", kind, input.len());

    let puzzle: Box<dyn DynPuzzle> = match kind {
        PuzzleKind::ReindeerMaze => {
            Box::new(PuzzleInstance::new(kind.name(), ReindeerMaze, input)?)
        }
        PuzzleKind::RamRun => Box::new(PuzzleInstance::new(
            kind.name(),
            RamRun::new(options.memory_size, options.fallen_bytes),
            input,
        )?),
        PuzzleKind::WeightedGrid => {
            Box::new(PuzzleInstance::new(kind.name(), WeightedGrid, input)?)
        }
    };
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SolveError};

    #[test]
    fn test_kind_round_trips_through_name() {
        for kind in PuzzleKind::ALL {
            assert_eq!(kind.name().parse::<PuzzleKind>().unwrap(), kind);
        }
        assert_eq!("RAM_RUN".parse::<PuzzleKind>().unwrap(), PuzzleKind::RamRun);
    }

    #[test]
    fn test_unknown_kind_lists_choices() {
        let err = "maze".parse::<PuzzleKind>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"maze\""));
        assert!(msg.contains("reindeer-maze, ram-run, weighted-grid"));
    }

    #[test]
    fn test_create_passes_options() {
        let options = PuzzleOptions {
            memory_size: 3,
            fallen_bytes: 1,
        };
        let mut puzzle = create(PuzzleKind::RamRun, &options, "1,1\n0,1\n1,0").unwrap();

        assert_eq!(puzzle.name(), "ram-run");
        assert_eq!(puzzle.solve(1).unwrap().answer, "4");
        assert_eq!(puzzle.solve(2).unwrap().answer, "1,0");
    }

    #[test]
    fn test_create_reports_parse_errors() {
        let result = create(PuzzleKind::WeightedGrid, &PuzzleOptions::default(), "S..");
        assert!(matches!(
            result,
            Err(PuzzleError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_part_out_of_range() {
        let mut puzzle =
            create(PuzzleKind::WeightedGrid, &PuzzleOptions::default(), "S.E").unwrap();
        assert_eq!(puzzle.parts(), 2);
        assert!(matches!(puzzle.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(puzzle.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert!(puzzle.overlay().unwrap().is_some());
    }
}
