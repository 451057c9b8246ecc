//! Fixed state graph: labeled states, undirected edges, and the reward matrix.
//!
//! The state set and adjacency are constructed once at startup and never
//! mutated. The reward matrix is derived from them exactly once per goal and
//! is read-only during training.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable bijection between state labels and dense indices in `[0, N)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StateSpace {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl StateSpace {
    /// Build a state space from an ordered list of labels.
    ///
    /// Label order determines index assignment. Duplicate labels are a
    /// configuration error, as is an empty list.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::EmptyStateSpace);
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(Error::DuplicateState {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels, index })
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up the index for a label, if the label is known.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Look up the index for a label, failing fast on unknown labels.
    pub fn require(&self, label: &str) -> Result<usize> {
        self.index_of(label).ok_or_else(|| Error::UnknownState {
            label: label.to_string(),
        })
    }

    /// Label for a dense index. Indices come from this state space, so the
    /// caller guarantees `index < len()`.
    pub fn label_of(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl TryFrom<Vec<String>> for StateSpace {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        StateSpace::new(labels)
    }
}

impl From<StateSpace> for Vec<String> {
    fn from(space: StateSpace) -> Self {
        space.labels
    }
}

/// Reward constants used when building the reward matrix.
///
/// `base` is the reward for any allowed transition along an edge. `terminal`
/// is the goal state's self-transition reward and must strictly dominate
/// `base * (1 + gamma)` so the Bellman update converges toward the goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RewardScheme {
    pub base: f64,
    pub terminal: f64,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            base: 1.0,
            terminal: 1000.0,
        }
    }
}

impl RewardScheme {
    /// Validate reward values against the discount factor.
    pub fn validate(&self, gamma: f64) -> Result<()> {
        for value in [self.base, self.terminal] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidReward { value });
            }
        }
        let required = self.base * (1.0 + gamma);
        if self.terminal <= required {
            return Err(Error::TerminalRewardTooSmall {
                terminal: self.terminal,
                required,
            });
        }
        Ok(())
    }
}

/// Fixed state graph: a state space plus an undirected edge list.
#[derive(Debug, Clone)]
pub struct Network {
    states: StateSpace,
    edges: Vec<(usize, usize)>,
}

impl Network {
    /// Build a network from a state space and undirected label pairs.
    ///
    /// Every endpoint must name a known state. Re-asserting an edge is a
    /// no-op, not an error.
    pub fn new<S: AsRef<str>>(states: StateSpace, edges: &[(S, S)]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(edges.len());

        for (from, to) in edges {
            let (from, to) = (from.as_ref(), to.as_ref());
            let u = states.index_of(from).ok_or_else(|| unknown_endpoint(from, to, from))?;
            let v = states.index_of(to).ok_or_else(|| unknown_endpoint(from, to, to))?;
            // Normalize so (u,v) and (v,u) dedupe to the same edge.
            let key = (u.min(v), u.max(v));
            if seen.insert(key) {
                resolved.push(key);
            }
        }

        Ok(Self {
            states,
            edges: resolved,
        })
    }

    pub fn states(&self) -> &StateSpace {
        &self.states
    }

    /// Undirected edges as normalized index pairs.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Derive the reward matrix for a goal state.
    ///
    /// `R[i][j] = R[j][i] = base` for every edge, `R[goal][goal] = terminal`,
    /// everything else 0 (no access).
    pub fn reward_matrix(&self, goal: usize, rewards: &RewardScheme) -> RewardMatrix {
        let n = self.states.len();
        let mut values = vec![0.0; n * n];
        for &(u, v) in &self.edges {
            values[u * n + v] = rewards.base;
            values[v * n + u] = rewards.base;
        }
        values[goal * n + goal] = rewards.terminal;
        RewardMatrix { n, values }
    }
}

fn unknown_endpoint(from: &str, to: &str, unknown: &str) -> Error {
    Error::UnknownEdgeEndpoint {
        from: from.to_string(),
        to: to.to_string(),
        unknown: unknown.to_string(),
    }
}

/// Dense N×N reward matrix. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RewardMatrix {
    n: usize,
    values: Vec<f64>,
}

impl RewardMatrix {
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.n + to]
    }

    /// Feasible successors of `state`: every `j` with `R[state][j] > 0`.
    pub fn feasible(&self, state: usize) -> Vec<usize> {
        let row = &self.values[state * self.n..(state + 1) * self.n];
        row.iter()
            .enumerate()
            .filter(|&(_, &r)| r > 0.0)
            .map(|(j, _)| j)
            .collect()
    }
}
