//! Lookup of the single start or end marker in a puzzle grid

use crate::error::ParseError;
use gridpath::{Grid, Position};
use itertools::Itertools;

/// Position of the only cell holding `marker`
pub(crate) fn find_unique(grid: &Grid<char>, marker: char) -> Result<Position, ParseError> {
    grid.iter()
        .filter(|(_, c)| **c == marker)
        .map(|(p, _)| p)
        .at_most_one()
        .map_err(|_| ParseError::InvalidFormat(format!("more than one '{marker}' cell")))?
        .ok_or_else(|| ParseError::MissingData(format!("no '{marker}' cell")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_unique() {
        let grid = Grid::parse_chars("S.\n.E").unwrap();
        assert_eq!(find_unique(&grid, 'E').unwrap(), Position::new(1, 1));
    }

    #[test]
    fn test_missing_and_duplicate_markers() {
        let grid = Grid::parse_chars("S.\nSE").unwrap();
        assert!(matches!(find_unique(&grid, 'S'), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(find_unique(&grid, 'X'), Err(ParseError::MissingData(_))));
    }
}
