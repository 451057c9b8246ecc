//! Greedy route extraction from a trained model.
//!
//! Pure rollout over the learned Q table: from the start state, repeatedly
//! take the highest-valued successor until the goal is reached or the step
//! bound is exhausted. No exploration, no mutation; safe to invoke
//! concurrently against a shared model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::Result, learning::trainer::TrainedModel};

/// An extracted route: ordered state labels from start toward the goal.
///
/// `reached_goal` distinguishes a complete route from a degraded partial
/// one. A partial route is a normal value, not an error: greedy rollout can
/// cycle when training did not converge for the start state, and the caller
/// decides how to render that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub labels: Vec<String>,
    pub reached_goal: bool,
}

impl Route {
    /// Final state of the route; equals the goal label iff `reached_goal`.
    pub fn last(&self) -> &str {
        // Routes always contain at least the start state.
        self.labels.last().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(" -> "))
    }
}

impl TrainedModel {
    /// Extract the greedy route from `start` to this model's goal.
    ///
    /// Fails fast on an unknown start label. Otherwise walks the argmax
    /// successor (lowest index on ties) for at most N steps, so the route
    /// holds at most N+1 states.
    pub fn route(&self, start: &str) -> Result<Route> {
        let mut current = self.states().require(start)?;
        let goal = self.goal();
        let bound = self.states().len();

        let mut indices = Vec::with_capacity(bound + 1);
        indices.push(current);
        for _ in 0..bound {
            if current == goal {
                break;
            }
            current = self.q().greedy_action(current);
            indices.push(current);
        }

        Ok(Route {
            labels: indices
                .into_iter()
                .map(|i| self.states().label_of(i).to_string())
                .collect(),
            reached_goal: current == goal,
        })
    }
}
