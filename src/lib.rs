//! Tabular Q-learning route planner over fixed state graphs
//!
//! This crate provides:
//! - A fixed state graph model (labeled states, undirected edges) and its
//!   derived reward matrix
//! - A Q-learning trainer running randomized single-step episodes
//! - Greedy route extraction from the trained action-value table
//! - A CLI for training models and querying routes

pub mod cli;
pub mod error;
pub mod graph;
pub mod learning;
pub mod policy;

pub use error::{Error, Result};
pub use graph::{Network, RewardMatrix, RewardScheme, StateSpace};
pub use learning::{
    QTable, SavedModel, TrainedModel, TrainerConfig, TrainingReport, train, train_with,
};
pub use policy::Route;
