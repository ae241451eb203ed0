//! Owned 2D grid storage

use crate::error::GridError;
use crate::position::Position;
use std::fmt::Display;

/// A rectangular grid of cells stored row-major
///
/// The search engine never takes a `Grid` directly: successor closures borrow
/// one and use [`contains`](Grid::contains), [`get`](Grid::get) and
/// [`neighbors`](Grid::neighbors) to decide where a node can go. Mutation
/// through [`set`](Grid::set) is for the owner building or editing its own
/// copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Build a grid by calling `f` for every position
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Position) -> T) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
            .map(&mut f)
            .collect();
        Self { rows, cols, cells }
    }

    /// Parse a text block into a grid, one line per row and one char per cell
    ///
    /// Leading and trailing blank lines are ignored. `cell` converts each
    /// character; its error is reported with the cell's position.
    pub fn parse<E: Display>(
        input: &str,
        mut cell: impl FnMut(char) -> Result<T, E>,
    ) -> Result<Self, GridError> {
        let rows = input
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| {
                        cell(c).map_err(|e| GridError::InvalidCell {
                            row,
                            col,
                            reason: e.to_string(),
                        })
                    })
                    .collect::<Result<Vec<T>, GridError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `pos` lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Overwrite a cell, returning `false` when `pos` is out of bounds
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// First position (row-major) whose cell satisfies `pred`
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| pred(cell))
            .map(|i| self.position_of(i))
    }

    /// All cells with their positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.position_of(i), cell))
    }

    /// In-bounds orthogonal neighbours of `pos`, north, east, south, west
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.adjacent().filter(|p| self.contains(*p))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Rows become columns
    pub fn transpose(&self) -> Grid<T>
    where
        T: Clone,
    {
        Grid::from_fn(self.cols, self.rows, |pos| {
            self.cells[pos.col * self.cols + pos.row].clone()
        })
    }

    /// Rows as slices, top to bottom; nothing for a grid without columns
    pub fn lines(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.cols.max(1))
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }
}

impl Grid<char> {
    /// Parse a text block into a character grid
    pub fn parse_chars(input: &str) -> Result<Self, GridError> {
        Self::parse(input, Ok::<char, std::convert::Infallible>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chars() {
        let grid = Grid::parse_chars("\n#.S\n.E#\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Position::new(0, 2)), Some(&'S'));
        assert_eq!(grid.get(Position::new(1, 1)), Some(&'E'));
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Grid::parse_chars("...\n..\n...").unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Grid::parse_chars("\n\n").unwrap_err(), GridError::Empty);
        assert_eq!(
            Grid::<u8>::from_rows(vec![]).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn test_parse_reports_invalid_cell_position() {
        let err = Grid::parse("12\n3x", |c| c.to_digit(10).ok_or("not a digit")).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCell {
                row: 1,
                col: 1,
                reason: "not a digit".to_string()
            }
        );
    }

    #[test]
    fn test_from_fn_and_find() {
        let grid = Grid::from_fn(3, 4, |p| p.row * 10 + p.col);
        assert_eq!(grid.get(Position::new(2, 3)), Some(&23));
        assert_eq!(grid.find(|&v| v == 12), Some(Position::new(1, 2)));
        assert_eq!(grid.find(|&v| v == 99), None);
    }

    #[test]
    fn test_neighbors_respect_bounds() {
        let grid = Grid::from_fn(2, 2, |_| ());
        let corner: Vec<_> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(corner, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn test_set_only_in_bounds() {
        let mut grid = Grid::from_fn(2, 2, |_| '.');
        assert!(grid.set(Position::new(1, 0), '#'));
        assert!(!grid.set(Position::new(2, 0), '#'));
        assert_eq!(grid.get(Position::new(1, 0)), Some(&'#'));
    }

    #[test]
    fn test_empty_grid_has_no_lines() {
        let empty = Grid::<char>::from_fn(0, 0, |_| '.');
        assert_eq!(empty.lines().count(), 0);
        assert_eq!(empty.find(|_| true), None);
        assert_eq!(empty.neighbors(Position::new(0, 0)).count(), 0);

        let no_cols = Grid::<char>::from_fn(3, 0, |_| '.');
        assert_eq!(no_cols.lines().count(), 0);
        assert_eq!(no_cols.transpose().lines().count(), 0);
    }

    #[test]
    fn test_transpose() {
        let grid = Grid::parse_chars("abc\ndef").unwrap();
        let t = grid.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        let lines: Vec<String> = t.lines().map(|l| l.iter().collect()).collect();
        assert_eq!(lines, vec!["ad", "be", "cf"]);
    }
}
