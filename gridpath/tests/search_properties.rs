//! Property-based tests for the search engine
//!
//! **Feature: all-optimal-paths search**

use gridpath::{Goal, Grid, Position, Scored, SearchError, SearchResult, manhattan, search};
use proptest::prelude::*;
use std::collections::{BTreeSet, VecDeque};

/// Small grid with random walls; start and goal corners are always open
fn walled_grid() -> impl Strategy<Value = Grid<bool>> {
    (2usize..=5, 2usize..=5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::bool::weighted(0.3), rows * cols).prop_map(move |walls| {
            Grid::from_fn(rows, cols, |p| {
                let corner = p == Position::new(0, 0) || p == Position::new(rows - 1, cols - 1);
                !corner && walls[p.row * cols + p.col]
            })
        })
    })
}

/// Small grid of entry costs between 1 and 9
fn weighted_grid() -> impl Strategy<Value = Grid<u64>> {
    (2usize..=4, 2usize..=4).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(1u64..=9, rows * cols)
            .prop_map(move |costs| Grid::from_fn(rows, cols, |p| costs[p.row * cols + p.col]))
    })
}

fn goal_of<T>(grid: &Grid<T>) -> Position {
    Position::new(grid.rows() - 1, grid.cols() - 1)
}

fn run_walled(grid: &Grid<bool>) -> Result<SearchResult<Position>, SearchError> {
    let goal = goal_of(grid);
    search(
        Position::new(0, 0),
        Goal::Position(goal),
        |current: &Scored<Position>| {
            grid.neighbors(current.node)
                .filter(|p| grid.get(*p) == Some(&false))
                .map(|p| Scored::new(p, current.score + 1))
                .collect()
        },
        |p: &Position| manhattan(*p, goal),
    )
}

fn run_weighted(grid: &Grid<u64>) -> SearchResult<Position> {
    let goal = goal_of(grid);
    search(
        Position::new(0, 0),
        Goal::Position(goal),
        |current: &Scored<Position>| {
            grid.neighbors(current.node)
                .filter_map(|p| grid.get(p).map(|cost| Scored::new(p, current.score + cost)))
                .collect()
        },
        |p: &Position| manhattan(*p, goal),
    )
    .expect("open grids always have a path")
}

/// Breadth-first distance and number of shortest paths to the goal
fn brute_force_walled(grid: &Grid<bool>) -> Option<(u64, usize)> {
    let start = Position::new(0, 0);
    let goal = goal_of(grid);
    let mut dist = grid.map(|_| None::<u64>);
    let mut count = grid.map(|_| 0usize);
    dist.set(start, Some(0));
    count.set(start, 1);

    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = dist.get(p).copied().flatten()?;
        let c = *count.get(p)?;
        for n in grid.neighbors(p).filter(|n| grid.get(*n) == Some(&false)) {
            match dist.get(n).copied().flatten() {
                None => {
                    dist.set(n, Some(d + 1));
                    count.set(n, c);
                    queue.push_back(n);
                }
                Some(nd) if nd == d + 1 => {
                    let total = count.get(n).copied().unwrap_or(0) + c;
                    count.set(n, total);
                }
                Some(_) => {}
            }
        }
    }

    let d = dist.get(goal).copied().flatten()?;
    Some((d, count.get(goal).copied().unwrap_or(0)))
}

/// Minimal entry-cost distance by repeated relaxation
fn brute_force_weighted(grid: &Grid<u64>) -> u64 {
    let mut dist = grid.map(|_| u64::MAX);
    dist.set(Position::new(0, 0), 0);

    let mut changed = true;
    while changed {
        changed = false;
        for (p, _) in grid.iter() {
            let Some(&d) = dist.get(p) else { continue };
            if d == u64::MAX {
                continue;
            }
            for n in grid.neighbors(p) {
                let candidate = d + grid.get(n).copied().unwrap_or(0);
                if dist.get(n).is_some_and(|&nd| candidate < nd) {
                    dist.set(n, candidate);
                    changed = true;
                }
            }
        }
    }

    dist.get(goal_of(grid)).copied().unwrap_or(u64::MAX)
}

fn is_valid_walk(grid: &Grid<bool>, path: &[Position]) -> bool {
    path.iter().all(|p| grid.get(*p) == Some(&false))
        && path.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Feature: all-optimal-paths search, Property 1: Optimality**
    /// *For any* walled grid, the minimal score equals the breadth-first
    /// distance, and an unreachable goal yields `NoPathFound`.
    #[test]
    fn prop_min_score_matches_brute_force(grid in walled_grid()) {
        match (run_walled(&grid), brute_force_walled(&grid)) {
            (Ok(result), Some((distance, _))) => prop_assert_eq!(result.min_score(), distance),
            (Err(SearchError::NoPathFound), None) => {}
            (result, expected) => prop_assert!(
                false,
                "search gave {:?}, brute force gave {:?}",
                result.map(|r| r.min_score()),
                expected
            ),
        }
    }

    /// **Feature: all-optimal-paths search, Property 2: Completeness of all paths**
    /// *For any* reachable goal, `best_paths` enumerates exactly the shortest
    /// walks, each from the start to the goal with cost `min_score`, and
    /// `best_path_count` agrees with how many there are.
    #[test]
    fn prop_best_paths_are_all_shortest_walks(grid in walled_grid()) {
        let Some((distance, count)) = brute_force_walled(&grid) else {
            return Ok(());
        };
        let result = run_walled(&grid).unwrap();
        let paths = result.best_paths();

        prop_assert_eq!(paths.len(), count);
        prop_assert_eq!(result.best_path_count(), count as u64);
        let distinct: BTreeSet<_> = paths.iter().collect();
        prop_assert_eq!(distinct.len(), count);

        let (start, goal) = (Position::new(0, 0), goal_of(&grid));
        for path in &paths {
            prop_assert_eq!(path.len() as u64, distance + 1);
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&goal));
            prop_assert!(is_valid_walk(&grid, path));
        }
        prop_assert!(paths.contains(&result.best_path()));
    }

    /// **Feature: all-optimal-paths search, Property 3: Optimal positions**
    /// *For any* reachable goal, the optimal positions are exactly the union
    /// of the positions of every best path.
    #[test]
    fn prop_optimal_positions_are_union_of_best_paths(grid in walled_grid()) {
        let Ok(result) = run_walled(&grid) else {
            return Ok(());
        };
        let union: BTreeSet<Position> = result.best_paths().into_iter().flatten().collect();
        prop_assert_eq!(result.optimal_positions(), union);
    }

    /// **Feature: all-optimal-paths search, Property 4: Determinism**
    /// *For any* input, two runs agree on score, best path and all best paths.
    #[test]
    fn prop_runs_are_deterministic(grid in walled_grid()) {
        match (run_walled(&grid), run_walled(&grid)) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.min_score(), b.min_score());
                prop_assert_eq!(a.best_path(), b.best_path());
                prop_assert_eq!(a.best_paths(), b.best_paths());
                prop_assert_eq!(a.goal_keys(), b.goal_keys());
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "runs disagreed on reachability"),
        }
    }

    /// **Feature: all-optimal-paths search, Property 5: Weighted optimality**
    /// *For any* grid of entry costs, the minimal score equals the relaxed
    /// distance and every best path costs exactly that much.
    #[test]
    fn prop_weighted_paths_cost_min_score(grid in weighted_grid()) {
        let result = run_weighted(&grid);
        prop_assert_eq!(result.min_score(), brute_force_weighted(&grid));

        for path in result.best_paths() {
            let cost: u64 = path[1..].iter().filter_map(|p| grid.get(*p)).sum();
            prop_assert_eq!(cost, result.min_score());
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_brute_force_counts_open_square() {
        let grid = Grid::from_fn(3, 3, |_| false);
        assert_eq!(brute_force_walled(&grid), Some((4, 6)));
        assert_eq!(run_walled(&grid).unwrap().best_paths().len(), 6);
    }

    #[test]
    fn test_blocked_corner() {
        let grid = Grid::from_fn(2, 2, |p| p != Position::new(0, 0) && p != Position::new(1, 1));
        assert_eq!(brute_force_walled(&grid), None);
        assert!(matches!(run_walled(&grid), Err(SearchError::NoPathFound)));
    }
}
