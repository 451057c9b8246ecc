//! Network documents for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::{Network, StateSpace};

/// JSON-loadable description of a state graph and its goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDocument {
    /// State labels; order fixes index assignment
    pub states: Vec<String>,
    /// Undirected edges as label pairs
    pub edges: Vec<(String, String)>,
    /// Goal state label
    pub goal: String,
}

impl NetworkDocument {
    /// Load a network document from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read network file: {}", path.as_ref().display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse network file: {}", path.as_ref().display()))
    }

    /// Validate the document into a network plus its goal label.
    pub fn into_network(self) -> crate::error::Result<(Network, String)> {
        let states = StateSpace::new(self.states)?;
        let network = Network::new(states, &self.edges)?;
        // Reject unknown goal labels before any training starts.
        network.states().require(&self.goal)?;
        Ok((network, self.goal))
    }

    /// Built-in 20-node transit network with goal `G`.
    ///
    /// Used when no network file is supplied.
    pub fn demo() -> Self {
        let states = ('A'..='T').map(|c| c.to_string()).collect();
        let edges = [
            ("A", "B"),
            ("A", "C"),
            ("A", "K"),
            ("B", "C"),
            ("C", "G"),
            ("G", "D"),
            ("G", "H"),
            ("D", "M"),
            ("D", "O"),
            ("M", "L"),
            ("M", "N"),
            ("M", "O"),
            ("O", "P"),
            ("P", "Q"),
            ("Q", "R"),
            ("R", "S"),
            ("S", "T"),
            ("T", "K"),
            ("H", "I"),
            ("I", "J"),
            ("J", "F"),
            ("F", "E"),
        ]
        .into_iter()
        .map(|(u, v)| (u.to_string(), v.to_string()))
        .collect();

        Self {
            states,
            edges,
            goal: "G".to_string(),
        }
    }
}
