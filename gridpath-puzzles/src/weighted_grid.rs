//! Weighted grid: cells cost what they say to enter.
//!
//! `S` and `E` mark the ends, `#` is a wall, `.` costs 1 and a digit `1`-`9`
//! costs its value. A `0` cell is rejected: every step must cost at least 1
//! for Manhattan distance to stay a lower bound.

use crate::error::{ParseError, SolveError};
use crate::markers::find_unique;
use crate::solver::{Overlay, PartSolver, PuzzleParser, Solver};
use gridpath::{Goal, Grid, Position, Scored, SearchError, SearchResult, manhattan, search};

pub struct WeightedGrid;

#[derive(Debug)]
pub struct Terrain {
    grid: Grid<char>,
    start: Position,
    end: Position,
    result: Option<SearchResult<Position>>,
}

/// Cost of stepping onto `cell`, or `None` for a wall
fn entry_cost(cell: char) -> Option<u64> {
    match cell {
        '#' => None,
        '.' | 'S' | 'E' => Some(1),
        digit => digit.to_digit(10).map(u64::from),
    }
}

impl PuzzleParser for WeightedGrid {
    type Shared = Terrain;

    fn parse(&self, input: &str) -> Result<Terrain, ParseError> {
        let grid = Grid::parse(input, |c| match c {
            '0' => Err("zero-cost cells are not allowed".to_string()),
            '#' | '.' | 'S' | 'E' | '1'..='9' => Ok(c),
            other => Err(format!("unexpected {other:?}")),
        })?;
        let start = find_unique(&grid, 'S')?;
        let end = find_unique(&grid, 'E')?;

        Ok(Terrain {
            grid,
            start,
            end,
            result: None,
        })
    }
}

impl PartSolver<1> for WeightedGrid {
    fn solve(&self, shared: &mut Terrain) -> Result<String, SolveError> {
        Ok(solve_once(shared)?.min_score().to_string())
    }
}

impl PartSolver<2> for WeightedGrid {
    fn solve(&self, shared: &mut Terrain) -> Result<String, SolveError> {
        Ok(solve_once(shared)?.best_path_count().to_string())
    }
}

impl Solver for WeightedGrid {
    const PARTS: u8 = 2;

    fn solve_part(&self, shared: &mut Terrain, part: u8) -> Result<String, SolveError> {
        match part {
            1 => PartSolver::<1>::solve(self, shared),
            2 => PartSolver::<2>::solve(self, shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }

    fn overlay(&self, shared: &mut Terrain) -> Result<Option<Overlay>, SolveError> {
        let highlighted = solve_once(shared)?.optimal_positions();
        Ok(Some(Overlay {
            grid: shared.grid.clone(),
            highlighted,
        }))
    }
}

fn solve_once(terrain: &mut Terrain) -> Result<&SearchResult<Position>, SolveError> {
    let result = match terrain.result.take() {
        Some(result) => result,
        None => run(&terrain.grid, terrain.start, terrain.end)?,
    };
    Ok(terrain.result.insert(result))
}

fn run(
    grid: &Grid<char>,
    start: Position,
    end: Position,
) -> Result<SearchResult<Position>, SearchError> {
    let result = search(
        start,
        Goal::Position(end),
        |current: &Scored<Position>| {
            grid.neighbors(current.node)
                .filter_map(|p| {
                    let cost = grid.get(p).copied().and_then(entry_cost)?;
                    Some(Scored::new(p, current.score + cost))
                })
                .collect()
        },
        |p: &Position| manhattan(*p, end),
    )?;

    log::debug!(
        "weighted grid: cost {} over {} goal state(s), {} cells expanded",
        result.min_score(),
        result.goal_keys().len(),
        result.expanded_count()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverExt;
    use itertools::Itertools;

    fn answers(input: &str) -> (String, String) {
        let mut terrain = WeightedGrid.parse(input).unwrap();
        (
            WeightedGrid.solve_part_checked_range(&mut terrain, 1).unwrap(),
            WeightedGrid.solve_part_checked_range(&mut terrain, 2).unwrap(),
        )
    }

    #[test]
    fn test_open_ring_has_two_paths() {
        assert_eq!(answers("S..\n.#.\n..E"), ("4".into(), "2".into()));
    }

    #[test]
    fn test_heavy_cell_breaks_the_tie() {
        assert_eq!(answers("S2.\n.#.\n..E"), ("4".into(), "1".into()));
    }

    #[test]
    fn test_cheap_detour_beats_straight_line() {
        // Straight along the top costs 19; the loop underneath costs 7
        let input = "\
S99E
.##.
....";
        assert_eq!(answers(input), ("7".into(), "1".into()));
    }

    #[test]
    fn test_counts_paths_across_open_room() {
        let input = (0..16)
            .map(|row| match row {
                0 => format!("S{}", ".".repeat(15)),
                15 => format!("{}E", ".".repeat(15)),
                _ => ".".repeat(16),
            })
            .join("\n");
        assert_eq!(answers(&input), ("30".into(), "155117520".into()));
    }

    #[test]
    fn test_overlay_is_union_of_paths() {
        let mut terrain = WeightedGrid.parse("S..\n.#.\n..E").unwrap();
        let overlay = WeightedGrid.overlay(&mut terrain).unwrap().unwrap();
        assert_eq!(overlay.highlighted.len(), 8);
        assert!(!overlay.highlighted.contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_rejects_zero_cost_cell() {
        match WeightedGrid.parse("S0E") {
            Err(ParseError::Grid(gridpath::GridError::InvalidCell { row, col, .. })) => {
                assert_eq!((row, col), (0, 1));
            }
            other => panic!("expected InvalidCell, got {other:?}"),
        }
    }

    #[test]
    fn test_wall_between_ends() {
        let mut terrain = WeightedGrid.parse("S#E").unwrap();
        assert!(matches!(
            WeightedGrid.solve_part_checked_range(&mut terrain, 2),
            Err(SolveError::Search(SearchError::NoPathFound))
        ));
        assert!(matches!(
            WeightedGrid.solve_part_checked_range(&mut terrain, 3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }
}
