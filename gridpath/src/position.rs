//! Grid coordinates and compass directions

use std::fmt;

/// A cell coordinate in a 2D grid
///
/// Ordering is row-major, so sorted collections of positions read top to
/// bottom, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `dir`, or `None` when that would go above row 0 or left of column 0.
    ///
    /// The result is not bounds-checked against any grid; use
    /// [`Grid::contains`](crate::Grid::contains) for that.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (row, col) = match dir {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::East => (self.row, self.col.checked_add(1)?),
            Direction::South => (self.row.checked_add(1)?, self.col),
            Direction::West => (self.row, self.col.checked_sub(1)?),
        };
        Some(Position { row, col })
    }

    /// Orthogonal neighbours in north, east, south, west order
    pub fn adjacent(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().filter_map(move |dir| self.step(dir))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Manhattan (taxicab) distance between two positions
///
/// Admissible as a heuristic whenever every step costs at least 1.
pub fn manhattan(a: Position, b: Position) -> u64 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u64
}

/// One of the four compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// A turn relative to a current heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeTurn {
    Forward,
    Left,
    Right,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Heading after a 90° counter-clockwise turn
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Heading after a 90° clockwise turn
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn reverse(self) -> Self {
        self.turn_left().turn_left()
    }

    /// Direction of travel from `from` to an orthogonally aligned `to`.
    ///
    /// Returns `None` for identical or diagonally offset positions.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        use std::cmp::Ordering::*;

        match (from.row.cmp(&to.row), from.col.cmp(&to.col)) {
            (Equal, Less) => Some(Direction::East),
            (Equal, Greater) => Some(Direction::West),
            (Less, Equal) => Some(Direction::South),
            (Greater, Equal) => Some(Direction::North),
            _ => None,
        }
    }

    /// How `other` relates to `self` as a heading: straight on, a left or a
    /// right turn. A reversal is not a single turn and yields `None`.
    pub fn relative_to(self, other: Direction) -> Option<RelativeTurn> {
        if other == self {
            Some(RelativeTurn::Forward)
        } else if other == self.turn_left() {
            Some(RelativeTurn::Left)
        } else if other == self.turn_right() {
            Some(RelativeTurn::Right)
        } else {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
