//! Reindeer maze: the cheapest walk from `S` to `E` when every quarter turn
//! costs a thousand steps.

use crate::error::{ParseError, SolveError};
use crate::markers::find_unique;
use crate::solver::{Overlay, PartSolver, PuzzleParser, Solver};
use gridpath::{
    Direction, Goal, Grid, Node, Position, Scored, SearchError, SearchResult, manhattan, search,
};

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

/// The reindeer starts on `S` facing east
pub struct ReindeerMaze;

#[derive(Debug)]
pub struct Maze {
    grid: Grid<char>,
    start: Position,
    end: Position,
    result: Option<SearchResult<Node<Direction>>>,
}

impl PuzzleParser for ReindeerMaze {
    type Shared = Maze;

    fn parse(&self, input: &str) -> Result<Maze, ParseError> {
        let grid = Grid::parse(input, |c| match c {
            '#' | '.' | 'S' | 'E' => Ok(c),
            other => Err(format!("unexpected {other:?}")),
        })?;
        let start = find_unique(&grid, 'S')?;
        let end = find_unique(&grid, 'E')?;

        Ok(Maze {
            grid,
            start,
            end,
            result: None,
        })
    }
}

impl PartSolver<1> for ReindeerMaze {
    fn solve(&self, shared: &mut Maze) -> Result<String, SolveError> {
        Ok(solve_once(shared)?.min_score().to_string())
    }
}

impl PartSolver<2> for ReindeerMaze {
    fn solve(&self, shared: &mut Maze) -> Result<String, SolveError> {
        Ok(solve_once(shared)?.optimal_positions().len().to_string())
    }
}

impl Solver for ReindeerMaze {
    const PARTS: u8 = 2;

    fn solve_part(&self, shared: &mut Maze, part: u8) -> Result<String, SolveError> {
        match part {
            1 => PartSolver::<1>::solve(self, shared),
            2 => PartSolver::<2>::solve(self, shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }

    fn overlay(&self, shared: &mut Maze) -> Result<Option<Overlay>, SolveError> {
        let highlighted = solve_once(shared)?.optimal_positions();
        Ok(Some(Overlay {
            grid: shared.grid.clone(),
            highlighted,
        }))
    }
}

fn solve_once(maze: &mut Maze) -> Result<&SearchResult<Node<Direction>>, SolveError> {
    let result = match maze.result.take() {
        Some(result) => result,
        None => run(&maze.grid, maze.start, maze.end)?,
    };
    Ok(maze.result.insert(result))
}

fn run(
    grid: &Grid<char>,
    start: Position,
    end: Position,
) -> Result<SearchResult<Node<Direction>>, SearchError> {
    let result = search(
        Node::new(start, Direction::East),
        Goal::Position(end),
        |current: &Scored<Node<Direction>>| moves(grid, current),
        |node: &Node<Direction>| manhattan(node.pos, end),
    )?;

    log::debug!(
        "reindeer maze: score {} after expanding {} of {} states",
        result.min_score(),
        result.expanded_count(),
        result.discovered_count()
    );
    Ok(result)
}

fn moves(grid: &Grid<char>, current: &Scored<Node<Direction>>) -> Vec<Scored<Node<Direction>>> {
    let Node { pos, state: facing } = current.node;

    let mut next = vec![
        Scored::new(Node::new(pos, facing.turn_left()), current.score + TURN_COST),
        Scored::new(Node::new(pos, facing.turn_right()), current.score + TURN_COST),
    ];
    if let Some(ahead) = pos.step(facing).filter(|p| grid.get(*p).is_some_and(|c| *c != '#')) {
        next.push(Scored::new(Node::new(ahead, facing), current.score + STEP_COST));
    }
    next
}
