//! Dense action-value table for temporal difference learning.

use serde::{Deserialize, Serialize};

/// Action-value table Q, a dense N×N matrix of f64.
///
/// `get(s, a)` estimates the long-run value of taking the transition
/// `s -> a`. States and actions share the same index space, so the table is
/// square. Initialized to all zeros; mutated only by the trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    n: usize,
    values: Vec<f64>,
}

impl QTable {
    /// Create an all-zero N×N table.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Number of states (table side length).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.values[state * self.n + action]
    }

    pub fn set(&mut self, state: usize, action: usize, value: f64) {
        self.values[state * self.n + action] = value;
    }

    fn row(&self, state: usize) -> &[f64] {
        &self.values[state * self.n..(state + 1) * self.n]
    }

    /// Maximum Q-value over all actions in a state.
    pub fn row_max(&self, state: usize) -> f64 {
        self.row(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Greedy action for a state: the index of the maximal Q-value.
    ///
    /// Ties break toward the lowest index, which fixes rollout determinism.
    pub fn greedy_action(&self, state: usize) -> usize {
        let row = self.row(state);
        let mut best = 0;
        for (action, &q) in row.iter().enumerate().skip(1) {
            if q > row[best] {
                best = action;
            }
        }
        best
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_initialization() {
        let q = QTable::zeros(3);
        assert_eq!(q.len(), 3);
        assert!(q.iter().all(|v| v == 0.0));
    }

    #[test]
    fn set_get() {
        let mut q = QTable::zeros(3);
        q.set(0, 2, 1.5);
        assert_eq!(q.get(0, 2), 1.5);
        assert_eq!(q.get(2, 0), 0.0);
    }

    #[test]
    fn row_max_over_all_actions() {
        let mut q = QTable::zeros(3);
        q.set(1, 0, 0.5);
        q.set(1, 2, 2.0);
        assert_eq!(q.row_max(1), 2.0);
        assert_eq!(q.row_max(0), 0.0);
    }

    #[test]
    fn greedy_action_picks_maximum() {
        let mut q = QTable::zeros(3);
        q.set(0, 1, 0.5);
        q.set(0, 2, 1.5);
        assert_eq!(q.greedy_action(0), 2);
    }

    #[test]
    fn greedy_action_ties_break_to_lowest_index() {
        let mut q = QTable::zeros(4);
        q.set(0, 1, 2.0);
        q.set(0, 3, 2.0);
        assert_eq!(q.greedy_action(0), 1);
        // All-zero row resolves to index 0.
        assert_eq!(q.greedy_action(2), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let mut q = QTable::zeros(2);
        q.set(0, 1, 3.25);
        let bytes = rmp_serde::to_vec(&q).unwrap();
        let restored: QTable = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(restored, q);
    }
}
