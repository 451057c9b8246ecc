//! CLI infrastructure for the qroute planner
//!
//! This module provides the command-line interface for training route
//! models and querying greedy routes from saved models.

pub mod commands;
pub mod config;
pub mod output;
