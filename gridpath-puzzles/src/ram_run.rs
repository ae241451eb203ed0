//! RAM run: escape a square memory space while bytes fall into it.
//!
//! Each input line `X,Y` is a byte landing at column `X`, row `Y`. The walk
//! goes from the top-left to the bottom-right corner in orthogonal steps.

use crate::error::{ParseError, SolveError};
use crate::solver::{Overlay, PartSolver, PuzzleParser, Solver};
use anyhow::{Context, anyhow};
use gridpath::{Goal, Grid, Position, Scored, SearchError, SearchResult, manhattan, search};
use itertools::Itertools;

pub const DEFAULT_MEMORY_SIZE: usize = 71;
pub const DEFAULT_FALLEN_BYTES: usize = 1024;

/// Solver for a memory space of `memory_size` × `memory_size` cells, taking
/// the first `fallen_bytes` bytes into account for part 1
#[derive(Debug, Clone, Copy)]
pub struct RamRun {
    memory_size: usize,
    fallen_bytes: usize,
}

impl RamRun {
    pub fn new(memory_size: usize, fallen_bytes: usize) -> Self {
        Self {
            memory_size,
            fallen_bytes,
        }
    }

    fn exit(&self) -> Position {
        let last = self.memory_size.saturating_sub(1);
        Position::new(last, last)
    }

    /// Fresh memory grid with the first `count` bytes marked corrupted
    fn corrupted(&self, bytes: &[Position], count: usize) -> Grid<bool> {
        let mut grid = Grid::from_fn(self.memory_size, self.memory_size, |_| false);
        for &byte in bytes.iter().take(count) {
            grid.set(byte, true);
        }
        grid
    }

    fn escape(&self, memory: &Grid<bool>) -> Result<SearchResult<Position>, SearchError> {
        let (start, exit) = (Position::new(0, 0), self.exit());
        if memory.get(start) != Some(&false) || memory.get(exit) != Some(&false) {
            return Err(SearchError::NoPathFound);
        }

        search(
            start,
            Goal::Position(exit),
            |current: &Scored<Position>| {
                memory
                    .neighbors(current.node)
                    .filter(|p| memory.get(*p) == Some(&false))
                    .map(|p| Scored::new(p, current.score + 1))
                    .collect()
            },
            |p: &Position| manhattan(*p, exit),
        )
    }
}

impl Default for RamRun {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_SIZE, DEFAULT_FALLEN_BYTES)
    }
}

impl PuzzleParser for RamRun {
    /// Byte positions in the order they fall
    type Shared = Vec<Position>;

    fn parse(&self, input: &str) -> Result<Vec<Position>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                self.parse_byte(line)
                    .with_context(|| format!("(line {}) {line:?}", idx + 1))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl RamRun {
    fn parse_byte(&self, line: &str) -> anyhow::Result<Position> {
        let (x, y) = line
            .trim()
            .split(',')
            .map(str::parse::<usize>)
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected `X,Y`"))?;
        let (col, row) = (x?, y?);

        if col >= self.memory_size || row >= self.memory_size {
            return Err(anyhow!(
                "byte outside the {0}x{0} memory space",
                self.memory_size
            ));
        }
        Ok(Position::new(row, col))
    }
}

impl PartSolver<1> for RamRun {
    fn solve(&self, shared: &mut Vec<Position>) -> Result<String, SolveError> {
        let memory = self.corrupted(shared, self.fallen_bytes);
        let result = self.escape(&memory)?;

        log::debug!(
            "ram run: {} steps, {} cells expanded",
            result.min_score(),
            result.expanded_count()
        );
        Ok(result.min_score().to_string())
    }
}

impl PartSolver<2> for RamRun {
    fn solve(&self, shared: &mut Vec<Position>) -> Result<String, SolveError> {
        let bytes: &[Position] = shared;
        let reachable = |count: usize| self.escape(&self.corrupted(bytes, count)).is_ok();

        if reachable(bytes.len()) {
            return Err(SolveError::SolveFailed(
                anyhow!("the exit stays reachable after all {} bytes", bytes.len()).into(),
            ));
        }
        if !reachable(0) {
            return Err(SolveError::Search(SearchError::NoPathFound));
        }

        // reachable(low) holds, reachable(high) does not
        let (mut low, mut high) = (0, bytes.len());
        let mut probes = 0;
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if reachable(mid) {
                low = mid;
            } else {
                high = mid;
            }
            probes += 1;
        }
        log::debug!("ram run: byte {high} blocks the exit, found in {probes} probes");

        let blocker = bytes[high - 1];
        Ok(format!("{},{}", blocker.col, blocker.row))
    }
}

impl Solver for RamRun {
    const PARTS: u8 = 2;

    fn solve_part(&self, shared: &mut Vec<Position>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => PartSolver::<1>::solve(self, shared),
            2 => PartSolver::<2>::solve(self, shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }

    fn overlay(&self, shared: &mut Vec<Position>) -> Result<Option<Overlay>, SolveError> {
        let memory = self.corrupted(shared, self.fallen_bytes);
        let path = self.escape(&memory)?.best_path();

        Ok(Some(Overlay {
            grid: memory.map(|&corrupt| if corrupt { '#' } else { '.' }),
            highlighted: path.into_iter().collect(),
        }))
    }
}
