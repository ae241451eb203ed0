//! Trait-based search problem definition.

use std::marker::PhantomData;

use crate::node::{Scored, SearchNode};
use crate::position::Position;

/// A trait for defining best-first search problems.
///
/// Implement this trait to describe how a search space is explored: which
/// nodes follow a given node and at what cost, how far a node is estimated
/// to be from the goal, and which nodes count as goals.
///
/// # Type Parameters
///
/// - `N`: Node type, see [`SearchNode`]
///
/// # Example
///
/// ```rust
/// use gridpath::{astar, manhattan, Position, Scored, SearchProblem};
///
/// struct OpenField {
///     size: usize,
///     goal: Position,
/// }
///
/// impl SearchProblem<Position> for OpenField {
///     fn successors(&self, current: &Scored<Position>) -> Vec<Scored<Position>> {
///         current
///             .node
///             .adjacent()
///             .filter(|p| p.row < self.size && p.col < self.size)
///             .map(|p| Scored::new(p, current.score + 1))
///             .collect()
///     }
///
///     fn heuristic(&self, node: &Position) -> u64 {
///         manhattan(*node, self.goal)
///     }
///
///     fn is_goal(&self, node: &Position) -> bool {
///         *node == self.goal
///     }
/// }
///
/// let problem = OpenField { size: 4, goal: Position::new(3, 3) };
/// let result = astar(&problem, Position::new(0, 0)).unwrap();
/// assert_eq!(result.min_score(), 6);
/// ```
pub trait SearchProblem<N: SearchNode> {
    /// Candidate next nodes with their tentative scores.
    ///
    /// Each returned score is `current.score` plus the cost of the edge; the
    /// engine never computes edge costs itself.
    fn successors(&self, current: &Scored<N>) -> Vec<Scored<N>>;

    /// Estimated remaining cost from `node` to the nearest goal.
    ///
    /// Must never overestimate the true cost, or the returned paths may not
    /// be optimal. This is not checked.
    fn heuristic(&self, node: &N) -> u64;

    /// Whether `node` satisfies the goal condition.
    fn is_goal(&self, node: &N) -> bool;
}

/// What a search is looking for
pub enum Goal<N> {
    /// Exactly this node, auxiliary state included
    Node(N),
    /// Any node at this position, whatever its auxiliary state
    Position(Position),
    /// Any node accepted by the predicate
    Predicate(Box<dyn Fn(&N) -> bool>),
}

impl<N: SearchNode> Goal<N> {
    pub fn predicate(pred: impl Fn(&N) -> bool + 'static) -> Self {
        Goal::Predicate(Box::new(pred))
    }

    pub fn matches(&self, node: &N) -> bool {
        match self {
            Goal::Node(goal) => goal == node,
            Goal::Position(pos) => node.position() == *pos,
            Goal::Predicate(pred) => pred(node),
        }
    }
}

/// Wrapper to adapt closure functions to the SearchProblem trait.
pub struct ClosureProblem<N, S, H>
where
    S: Fn(&Scored<N>) -> Vec<Scored<N>>,
    H: Fn(&N) -> u64,
{
    goal: Goal<N>,
    successor_fn: S,
    heuristic_fn: H,
    _phantom: PhantomData<N>,
}

impl<N, S, H> ClosureProblem<N, S, H>
where
    N: SearchNode,
    S: Fn(&Scored<N>) -> Vec<Scored<N>>,
    H: Fn(&N) -> u64,
{
    /// Creates a problem from a goal, a successor function and a heuristic.
    pub fn new(goal: Goal<N>, successor_fn: S, heuristic_fn: H) -> Self {
        Self {
            goal,
            successor_fn,
            heuristic_fn,
            _phantom: PhantomData,
        }
    }
}

impl<N, S, H> SearchProblem<N> for ClosureProblem<N, S, H>
where
    N: SearchNode,
    S: Fn(&Scored<N>) -> Vec<Scored<N>>,
    H: Fn(&N) -> u64,
{
    fn successors(&self, current: &Scored<N>) -> Vec<Scored<N>> {
        (self.successor_fn)(current)
    }

    fn heuristic(&self, node: &N) -> u64 {
        (self.heuristic_fn)(node)
    }

    fn is_goal(&self, node: &N) -> bool {
        self.goal.matches(node)
    }
}
