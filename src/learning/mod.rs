//! Tabular Q-learning over the fixed state graph
//!
//! One "episode" here is a single random sample-and-update step, not a full
//! trajectory to the goal: sample a state, sample a feasible successor from
//! the reward matrix, apply one temporal-difference update.
//!
//! Q(s,a) ← Q(s,a) + α[R(s,a) + γ max_k Q(a,k) − Q(s,a)]
//!
//! Training runs to completion once, then the resulting [`TrainedModel`] is
//! read-only for the life of the process; route queries never mutate it.

pub mod q_table;
pub mod serialization;
pub mod trainer;

// Public re-exports
pub use q_table::QTable;
pub use serialization::SavedModel;
pub use trainer::{
    EpisodeSampler, RandomSampler, TrainedModel, TrainerConfig, TrainingReport, train, train_with,
};
