//! Terminal drawing of a solved grid

use gridpath::Position;
use gridpath_puzzles::Overlay;
use itertools::Itertools;

const HIGHLIGHT: &str = "\x1b[42;30m";
const RESET: &str = "\x1b[0m";
const PLAIN_MARK: char = 'O';

/// Draw the overlay grid one line per row
///
/// Highlighted cells get a green background when `color` is set, and are
/// replaced by `O` otherwise.
pub fn render_overlay(overlay: &Overlay, color: bool) -> String {
    overlay
        .grid
        .lines()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    let lit = overlay.highlighted.contains(&Position::new(row, col));
                    match (lit, color) {
                        (false, _) => cell.to_string(),
                        (true, true) => format!("{HIGHLIGHT}{cell}{RESET}"),
                        (true, false) => PLAIN_MARK.to_string(),
                    }
                })
                .join("")
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath::Grid;

    fn overlay() -> Overlay {
        Overlay {
            grid: Grid::parse_chars("S.#\n..E").unwrap(),
            highlighted: [(0, 0), (0, 1), (1, 1), (1, 2)]
                .map(|(r, c)| Position::new(r, c))
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_plain_marks_path() {
        assert_eq!(render_overlay(&overlay(), false), "OO#\n.OO");
    }

    #[test]
    fn test_color_wraps_cells() {
        let text = render_overlay(&overlay(), true);
        let first_line = text.lines().next().unwrap();
        assert_eq!(
            first_line,
            format!("{HIGHLIGHT}S{RESET}{HIGHLIGHT}.{RESET}#")
        );
        assert_eq!(text.matches(RESET).count(), 4);
    }

    #[test]
    fn test_nothing_highlighted() {
        let mut plain = overlay();
        plain.highlighted.clear();
        assert_eq!(render_overlay(&plain, true), "S.#\n..E");
    }
}
