//! Queries over a finished search.

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::node::{NodeKey, SearchNode};
use crate::position::Position;

/// Outcome of a successful search
///
/// Owns the score and parent maps of the run, so paths can be reconstructed
/// any number of times without searching again. Node ids are assigned in
/// discovery order, which makes every query deterministic.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    scores: Vec<u64>,
    parents: Vec<Vec<usize>>,
    expansion_order: Vec<usize>,
    start: usize,
    min_score: u64,
    best_goals: Vec<usize>,
}

impl<N: SearchNode> SearchResult<N> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        nodes: Vec<N>,
        index: HashMap<N, usize>,
        scores: Vec<u64>,
        parents: Vec<Vec<usize>>,
        expansion_order: Vec<usize>,
        start: usize,
        min_score: u64,
        best_goals: Vec<usize>,
    ) -> Self {
        Self {
            nodes,
            index,
            scores,
            parents,
            expansion_order,
            start,
            min_score,
            best_goals,
        }
    }

    /// Lowest cost from the start to any goal node
    pub fn min_score(&self) -> u64 {
        self.min_score
    }

    /// Goal nodes reached at [`min_score`](Self::min_score), in discovery order
    pub fn goal_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.best_goals.iter().map(|&id| &self.nodes[id])
    }

    /// Canonical keys of the minimal-score goal nodes
    pub fn goal_keys(&self) -> Vec<NodeKey> {
        self.goal_nodes().map(SearchNode::key).collect()
    }

    /// Best known score of `node`, if the search discovered it
    pub fn score_of(&self, node: &N) -> Option<u64> {
        self.index.get(node).map(|&id| self.scores[id])
    }

    /// Nodes in the order they were finalized
    pub fn expanded(&self) -> impl Iterator<Item = &N> + '_ {
        self.expansion_order.iter().map(|&id| &self.nodes[id])
    }

    pub fn expanded_count(&self) -> usize {
        self.expansion_order.len()
    }

    pub fn discovered_count(&self) -> usize {
        self.nodes.len()
    }

    /// One optimal path as nodes, start first
    ///
    /// Starts from the last minimal-score goal in discovery order and always
    /// follows the first predecessor registered for each node, stopping once
    /// the start position is reached.
    pub fn best_node_path(&self) -> Vec<N> {
        let Some(&goal) = self.best_goals.last() else {
            return Vec::new();
        };
        let start_pos = self.nodes[self.start].position();

        let mut path = vec![goal];
        let mut current = goal;
        while self.nodes[current].position() != start_pos && path.len() <= self.nodes.len() {
            let Some(&parent) = self.parents[current].first() else {
                break;
            };
            path.push(parent);
            current = parent;
        }

        path.iter().rev().map(|&id| self.nodes[id].clone()).collect()
    }

    /// One optimal path as positions, start first
    pub fn best_path(&self) -> Vec<Position> {
        self.best_node_path()
            .iter()
            .map(SearchNode::position)
            .collect()
    }

    /// Number of distinct optimal paths, without listing them
    ///
    /// Counts over the parent graph, so open areas with exponentially many
    /// paths stay cheap. A predecessor that would close a zero-cost cycle is
    /// not followed. Saturates at `u64::MAX`.
    pub fn best_path_count(&self) -> u64 {
        let start_pos = self.nodes[self.start].position();
        let mut counts: Vec<Option<u64>> = vec![None; self.nodes.len()];
        let mut in_progress = vec![false; self.nodes.len()];
        let mut total = 0u64;

        for &goal in &self.best_goals {
            let mut stack = vec![(goal, false)];
            while let Some((id, parents_pushed)) = stack.pop() {
                if counts[id].is_some() {
                    continue;
                }
                if self.nodes[id].position() == start_pos {
                    counts[id] = Some(1);
                    continue;
                }

                if parents_pushed {
                    in_progress[id] = false;
                    let count = self.parents[id]
                        .iter()
                        .filter_map(|&p| counts[p])
                        .fold(0, u64::saturating_add);
                    counts[id] = Some(count);
                } else if !in_progress[id] {
                    in_progress[id] = true;
                    stack.push((id, true));
                    stack.extend(
                        self.parents[id]
                            .iter()
                            .filter(|&&p| counts[p].is_none() && !in_progress[p])
                            .map(|&p| (p, false)),
                    );
                }
            }
            total = total.saturating_add(counts[goal].unwrap_or(0));
        }

        total
    }

    /// Every optimal path as positions, start first
    ///
    /// The number of paths can grow exponentially with the size of open
    /// areas; use [`best_path_count`](Self::best_path_count) when only the
    /// count is needed.
    pub fn best_paths(&self) -> Vec<Vec<Position>> {
        let start_pos = self.nodes[self.start].position();

        let mut pending: VecDeque<Vec<usize>> =
            self.best_goals.iter().map(|&goal| vec![goal]).collect();
        let mut complete = Vec::new();

        while let Some(partial) = pending.pop_front() {
            let Some(&earliest) = partial.last() else {
                continue;
            };
            if self.nodes[earliest].position() == start_pos {
                complete.push(partial);
                continue;
            }

            for &parent in &self.parents[earliest] {
                if partial.contains(&parent) {
                    continue;
                }
                let mut extended = partial.clone();
                extended.push(parent);
                pending.push_back(extended);
            }
        }

        complete
            .into_iter()
            .map(|path| {
                path.iter()
                    .rev()
                    .map(|&id| self.nodes[id].position())
                    .collect()
            })
            .collect()
    }

    /// Distinct positions that lie on at least one optimal path
    pub fn optimal_positions(&self) -> BTreeSet<Position> {
        let mut positions = BTreeSet::new();
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = self.best_goals.clone();

        while let Some(id) = stack.pop() {
            if seen[id] {
                continue;
            }
            seen[id] = true;
            positions.insert(self.nodes[id].position());
            stack.extend(self.parents[id].iter().filter(|&&p| !seen[p]));
        }

        positions
    }
}
