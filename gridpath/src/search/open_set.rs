//! Frontier ordered by estimated total cost.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: usize,
    f_score: u64,
}

/// Open set kept sorted by ascending f-score
///
/// A sorted list rather than a binary heap: entries with equal f-score come
/// out in the order they were inserted, which keeps expansion order (and so
/// every reconstructed path) reproducible. Grids are small enough that the
/// linear removal of stale entries does not matter.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    entries: VecDeque<Entry>,
    members: Vec<bool>,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `id`, replacing any entry it already has
    pub(crate) fn push(&mut self, id: usize, f_score: u64) {
        if self.contains(id) {
            if let Some(stale) = self.entries.iter().position(|e| e.id == id) {
                self.entries.remove(stale);
            }
        } else {
            if id >= self.members.len() {
                self.members.resize(id + 1, false);
            }
            self.members[id] = true;
        }

        let at = self.entries.partition_point(|e| e.f_score <= f_score);
        self.entries.insert(at, Entry { id, f_score });
    }

    /// Remove and return the entry with the lowest f-score
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let entry = self.entries.pop_front()?;
        self.members[entry.id] = false;
        Some(entry.id)
    }

    pub(crate) fn contains(&self, id: usize) -> bool {
        self.members.get(id).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_f_score_order() {
        let mut open = OpenSet::new();
        open.push(0, 5);
        open.push(1, 2);
        open.push(2, 9);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut open = OpenSet::new();
        open.push(3, 4);
        open.push(1, 4);
        open.push(2, 4);
        assert_eq!(open.pop(), Some(3));
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(2));
    }

    #[test]
    fn test_reinsert_replaces_stale_entry() {
        let mut open = OpenSet::new();
        open.push(0, 10);
        open.push(1, 7);
        open.push(0, 3);
        assert_eq!(open.len(), 2);
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), Some(1));
        assert!(!open.contains(0));
    }

    #[test]
    fn test_reinsert_goes_behind_equal_scores() {
        let mut open = OpenSet::new();
        open.push(0, 4);
        open.push(1, 4);
        open.push(0, 4);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(0));
    }
}
