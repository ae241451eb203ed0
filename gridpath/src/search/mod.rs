//! Best-first (A*) search that keeps every optimal predecessor
//!
//! The engine explores a search space described by a [`SearchProblem`]: a
//! successor function reporting tentative scores, an admissible heuristic and
//! a goal test. Unlike a textbook A*, it records *every* predecessor that
//! reaches a node at its minimal score, so [`SearchResult`] can hand back one
//! optimal path, all of them, or every position that lies on any of them.
//!
//! # Algorithm
//!
//! - The open set is a list sorted by f-score (g + h) with stable insertion,
//!   so ties are expanded in discovery order.
//! - A popped node is finalized and never expanded again.
//! - A strictly better score for a successor replaces its predecessor set
//!   and re-inserts it into the open set; an equal score only adds the
//!   current node as another predecessor; a worse score is dropped.
//! - The loop runs until the open set is empty. It does not stop at the
//!   first goal, since an equal-cost route into a goal may still be found
//!   after that goal was finalized.
//!
//! # Example: closure-based API
//!
//! ```rust
//! use gridpath::{manhattan, search, Goal, Grid, Position, Scored};
//!
//! let grid = Grid::parse_chars("...\n.#.\n...").unwrap();
//! let goal = Position::new(2, 2);
//!
//! let result = search(
//!     Position::new(0, 0),
//!     Goal::Position(goal),
//!     |current: &Scored<Position>| {
//!         grid.neighbors(current.node)
//!             .filter(|p| grid.get(*p) != Some(&'#'))
//!             .map(|p| Scored::new(p, current.score + 1))
//!             .collect()
//!     },
//!     |p: &Position| manhattan(*p, goal),
//! )
//! .unwrap();
//!
//! assert_eq!(result.min_score(), 4);
//! assert_eq!(result.best_paths().len(), 2);
//! ```
//!
//! # Example: auxiliary state
//!
//! Nodes can carry state besides their position. Here turning in place
//! costs extra, so the heading is part of the node:
//!
//! ```rust
//! use gridpath::{manhattan, search, Direction, Goal, Node, Position, Scored};
//!
//! let goal = Position::new(0, 3);
//! let result = search(
//!     Node::new(Position::new(0, 0), Direction::South),
//!     Goal::Position(goal),
//!     |current: &Scored<Node<Direction>>| {
//!         let Node { pos, state: facing } = current.node;
//!         let mut next = vec![
//!             Scored::new(Node::new(pos, facing.turn_left()), current.score + 10),
//!             Scored::new(Node::new(pos, facing.turn_right()), current.score + 10),
//!         ];
//!         if let Some(ahead) = pos.step(facing).filter(|p| p.row < 4 && p.col < 4) {
//!             next.push(Scored::new(Node::new(ahead, facing), current.score + 1));
//!         }
//!         next
//!     },
//!     |node: &Node<Direction>| manhattan(node.pos, goal),
//! )
//! .unwrap();
//!
//! // One turn to face east, then three steps.
//! assert_eq!(result.min_score(), 13);
//! ```

mod open_set;
mod problem;
mod result;

pub use problem::{ClosureProblem, Goal, SearchProblem};
pub use result::SearchResult;

use std::collections::HashMap;

use crate::error::SearchError;
use crate::node::{Scored, SearchNode};
use open_set::OpenSet;

/// Run a search from `start` over a trait-defined problem.
///
/// # Returns
///
/// * `Ok(SearchResult)` - at least one goal node was reached
/// * `Err(SearchError::NoPathFound)` - the open set emptied without reaching a goal
pub fn astar<N, P>(problem: &P, start: N) -> Result<SearchResult<N>, SearchError>
where
    N: SearchNode,
    P: SearchProblem<N>,
{
    let mut state = SearchState::new();
    let start_id = state.intern(start);
    state.scores[start_id] = Some(0);

    let mut open = OpenSet::new();
    open.push(start_id, problem.heuristic(&state.nodes[start_id]));

    while let Some(current_id) = open.pop() {
        state.visited[current_id] = true;
        state.expansion_order.push(current_id);

        let current = Scored::new(
            state.nodes[current_id].clone(),
            state.scores[current_id].unwrap_or(0),
        );

        for next in problem.successors(&current) {
            let next_id = state.intern(next.node);
            if next_id == current_id {
                continue;
            }

            if state.relax(current_id, next_id, next.score) && !state.visited[next_id] {
                let f_score = next.score.saturating_add(problem.heuristic(&state.nodes[next_id]));
                open.push(next_id, f_score);
            }
        }
    }

    let goals: Vec<usize> = (0..state.nodes.len())
        .filter(|&id| problem.is_goal(&state.nodes[id]))
        .collect();

    let min_score = goals
        .iter()
        .filter_map(|&id| state.scores[id])
        .min()
        .ok_or(SearchError::NoPathFound)?;

    let best_goals = goals
        .into_iter()
        .filter(|&id| state.scores[id] == Some(min_score))
        .collect();

    Ok(SearchResult::new(
        state.nodes,
        state.index,
        state
            .scores
            .into_iter()
            .map(|score| score.unwrap_or(u64::MAX))
            .collect(),
        state.parents,
        state.expansion_order,
        start_id,
        min_score,
        best_goals,
    ))
}

/// Run a search from `start` towards `goal`, with closures for successors and the heuristic.
///
/// See [`SearchProblem`] for the contract each closure must honour.
pub fn search<N, S, H>(
    start: N,
    goal: Goal<N>,
    successors: S,
    heuristic: H,
) -> Result<SearchResult<N>, SearchError>
where
    N: SearchNode,
    S: Fn(&Scored<N>) -> Vec<Scored<N>>,
    H: Fn(&N) -> u64,
{
    astar(&ClosureProblem::new(goal, successors, heuristic), start)
}

/// Per-call bookkeeping, indexed by node id in discovery order
struct SearchState<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    scores: Vec<Option<u64>>,
    parents: Vec<Vec<usize>>,
    visited: Vec<bool>,
    expansion_order: Vec<usize>,
}

impl<N: SearchNode> SearchState<N> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            scores: Vec::new(),
            parents: Vec::new(),
            visited: Vec::new(),
            expansion_order: Vec::new(),
        }
    }

    /// Id of `node`, registering it on first sight
    fn intern(&mut self, node: N) -> usize {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }

        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        self.scores.push(None);
        self.parents.push(Vec::new());
        self.visited.push(false);
        id
    }

    /// Apply a tentative score reached from `parent`.
    ///
    /// Returns `true` when the score improved (or was first seen).
    fn relax(&mut self, parent: usize, id: usize, score: u64) -> bool {
        match self.scores[id] {
            Some(known) if score > known => false,
            Some(known) if score == known => {
                if !self.parents[id].contains(&parent) {
                    self.parents[id].push(parent);
                }
                false
            }
            _ => {
                self.scores[id] = Some(score);
                self.parents[id].clear();
                self.parents[id].push(parent);
                true
            }
        }
    }
}
