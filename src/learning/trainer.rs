//! Q-learning trainer: randomized single-step episodes over the reward matrix.
//!
//! Each episode samples one state, one feasible successor, and applies a
//! single temporal-difference update. Exploration is fully random (no
//! epsilon-greedy schedule); convergence relies on the episode count
//! covering every feasible transition repeatedly.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    graph::{Network, RewardScheme, StateSpace},
    learning::q_table::QTable,
};

/// Source of the two random draws inside a training episode.
///
/// The production implementation wraps an RNG; tests supply scripted
/// sequences to assert exact Q trajectories.
pub trait EpisodeSampler {
    /// Pick the episode's current state, uniform over `[0, n)`.
    fn sample_state(&mut self, n: usize) -> usize;

    /// Pick the next state, uniform over the non-empty feasible set.
    fn sample_action(&mut self, feasible: &[usize]) -> usize;
}

/// Uniform random sampler backed by any [`Rng`].
pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> EpisodeSampler for RandomSampler<R> {
    fn sample_state(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    fn sample_action(&mut self, feasible: &[usize]) -> usize {
        // Callers guarantee the feasible set is non-empty.
        *feasible.choose(&mut self.rng).unwrap()
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Training configuration, validated fail-fast at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Discount factor γ, in (0, 1)
    pub gamma: f64,
    /// Learning rate α, in (0, 1]
    pub alpha: f64,
    /// Number of episode attempts (not effective updates)
    pub episodes: usize,
    /// Edge and goal-terminal reward values
    pub rewards: RewardScheme,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl TrainerConfig {
    /// Create a configuration, rejecting out-of-range parameters before any
    /// training starts.
    pub fn new(gamma: f64, alpha: f64, episodes: usize) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 0.0 || gamma >= 1.0 {
            return Err(Error::InvalidDiscountFactor { value: gamma });
        }
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(Error::InvalidLearningRate { value: alpha });
        }
        if episodes == 0 {
            return Err(Error::InvalidEpisodeCount);
        }
        let config = Self {
            gamma,
            alpha,
            episodes,
            rewards: RewardScheme::default(),
            seed: None,
        };
        config.rewards.validate(gamma)?;
        Ok(config)
    }

    /// Set the reward scheme, revalidating dominance against γ.
    pub fn with_rewards(mut self, rewards: RewardScheme) -> Result<Self> {
        rewards.validate(self.gamma)?;
        self.rewards = rewards;
        Ok(self)
    }

    /// Set the random seed for deterministic training.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Summary of one completed training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Episode attempts performed
    pub episodes: usize,
    /// Episodes skipped because the sampled state had no feasible successor
    pub skipped: usize,
    /// Discount factor used
    pub gamma: f64,
    /// Learning rate used
    pub alpha: f64,
    /// Goal state label
    pub goal: String,
    /// Seed, when training was deterministic
    pub seed: Option<u64>,
}

impl TrainingReport {
    /// Save the report as pretty-printed JSON.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// A trained action-value table together with the state space and goal it
/// was trained for.
///
/// Immutable once produced; route queries borrow it read-only, so a model
/// may serve arbitrarily many concurrent lookups. Changing the goal means
/// training a brand-new model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    states: StateSpace,
    q: QTable,
    goal: usize,
}

impl TrainedModel {
    pub(crate) fn new(states: StateSpace, q: QTable, goal: usize) -> Self {
        Self { states, q, goal }
    }

    pub fn states(&self) -> &StateSpace {
        &self.states
    }

    pub fn q(&self) -> &QTable {
        &self.q
    }

    /// Goal state index.
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Goal state label.
    pub fn goal_label(&self) -> &str {
        self.states.label_of(self.goal)
    }
}

/// Train a model over `network` toward `goal_label`.
///
/// Deterministic up to the configured seed. Returns the trained model and a
/// run report.
pub fn train(
    network: &Network,
    goal_label: &str,
    config: &TrainerConfig,
) -> Result<(TrainedModel, TrainingReport)> {
    let goal = network.states().require(goal_label)?;
    let mut sampler = RandomSampler::new(build_rng(config.seed));
    train_with(network, goal, config, &mut sampler)
}

/// Train with an explicit episode sampler.
///
/// Core loop, `config.episodes` attempts:
/// 1. Sample a current state `s` uniformly.
/// 2. Collect the feasible set `A(s) = {j : R[s][j] > 0}`; if empty, skip
///    the episode (counted, no update).
/// 3. Sample `a` uniformly from `A(s)`.
/// 4. `Q[s][a] += α * (R[s][a] + γ * max_k Q[a][k] - Q[s][a])`.
///
/// The max term ranges over the whole row; entries for infeasible
/// transitions are never written, so they stay at zero.
pub fn train_with<S: EpisodeSampler>(
    network: &Network,
    goal: usize,
    config: &TrainerConfig,
    sampler: &mut S,
) -> Result<(TrainedModel, TrainingReport)> {
    config.rewards.validate(config.gamma)?;

    let states = network.states().clone();
    let n = states.len();
    let r = network.reward_matrix(goal, &config.rewards);
    let mut q = QTable::zeros(n);

    let mut skipped = 0;
    for _ in 0..config.episodes {
        let s = sampler.sample_state(n);
        let feasible = r.feasible(s);
        if feasible.is_empty() {
            skipped += 1;
            continue;
        }
        let a = sampler.sample_action(&feasible);

        let td = r.get(s, a) + config.gamma * q.row_max(a) - q.get(s, a);
        q.set(s, a, q.get(s, a) + config.alpha * td);
    }

    let report = TrainingReport {
        episodes: config.episodes,
        skipped,
        gamma: config.gamma,
        alpha: config.alpha,
        goal: states.label_of(goal).to_string(),
        seed: config.seed,
    };

    Ok((TrainedModel::new(states, q, goal), report))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted sampler for exact-trajectory assertions.
    struct ScriptedSampler {
        states: Vec<usize>,
        cursor: usize,
    }

    impl ScriptedSampler {
        fn new(states: Vec<usize>) -> Self {
            Self { states, cursor: 0 }
        }
    }

    impl EpisodeSampler for ScriptedSampler {
        fn sample_state(&mut self, _n: usize) -> usize {
            let s = self.states[self.cursor];
            self.cursor += 1;
            s
        }

        fn sample_action(&mut self, feasible: &[usize]) -> usize {
            // Deterministic: always take the highest-index feasible successor,
            // which walks the line graph toward C.
            *feasible.last().unwrap()
        }
    }

    fn line_network() -> Network {
        let states = StateSpace::new(["A", "B", "C"]).unwrap();
        Network::new(states, &[("A", "B"), ("B", "C")]).unwrap()
    }

    #[test]
    fn config_rejects_out_of_range_parameters() {
        assert!(matches!(
            TrainerConfig::new(1.0, 0.9, 100).unwrap_err(),
            Error::InvalidDiscountFactor { .. }
        ));
        assert!(matches!(
            TrainerConfig::new(0.75, 0.0, 100).unwrap_err(),
            Error::InvalidLearningRate { .. }
        ));
        assert!(matches!(
            TrainerConfig::new(0.75, 1.1, 100).unwrap_err(),
            Error::InvalidLearningRate { .. }
        ));
        assert!(matches!(
            TrainerConfig::new(0.75, 0.9, 0).unwrap_err(),
            Error::InvalidEpisodeCount
        ));
        assert!(TrainerConfig::new(0.75, 1.0, 100).is_ok());
    }

    #[test]
    fn unknown_goal_fails_fast() {
        let config = TrainerConfig::new(0.75, 0.9, 10).unwrap();
        let err = train(&line_network(), "Z", &config).unwrap_err();
        assert!(matches!(err, Error::UnknownState { label } if label == "Z"));
    }

    #[test]
    fn exact_q_trajectory_with_scripted_sampler() {
        let network = line_network();
        let config = TrainerConfig::new(0.75, 0.9, 2).unwrap();

        // Episode 1: s=B, a=C. Episode 2: s=A, a=B.
        let mut sampler = ScriptedSampler::new(vec![1, 0]);
        let (model, report) = train_with(&network, 2, &config, &mut sampler).unwrap();

        // Q[B][C] = 0.9 * (1 + 0.75*0 - 0) = 0.9
        assert!((model.q().get(1, 2) - 0.9).abs() < 1e-12);
        // Q[A][B] = 0.9 * (1 + 0.75*0.9 - 0) = 1.5075
        assert!((model.q().get(0, 1) - 1.5075).abs() < 1e-12);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn isolated_state_skips_episode_without_update() {
        let states = StateSpace::new(["A", "B", "C"]).unwrap();
        let network = Network::new(states, &[("A", "B")]).unwrap();
        let config = TrainerConfig::new(0.75, 0.9, 1).unwrap();

        // C is isolated and the goal is A, so C's row of R is all zero.
        let mut sampler = ScriptedSampler::new(vec![2]);
        let (model, report) = train_with(&network, 0, &config, &mut sampler).unwrap();

        assert_eq!(report.skipped, 1);
        assert!(model.q().iter().all(|v| v == 0.0));
    }

    #[test]
    fn q_stays_non_negative_after_training() {
        let config = TrainerConfig::new(0.75, 0.9, 3000).unwrap().with_seed(42);
        let (model, _) = train(&line_network(), "C", &config).unwrap();
        assert!(model.q().iter().all(|v| v >= 0.0));
    }

    #[test]
    fn training_is_deterministic_given_seed() {
        let config = TrainerConfig::new(0.75, 0.9, 500).unwrap().with_seed(7);
        let (first, _) = train(&line_network(), "C", &config).unwrap();
        let (second, _) = train(&line_network(), "C", &config).unwrap();
        assert_eq!(first.q(), second.q());
    }
}
