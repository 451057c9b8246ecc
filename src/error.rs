//! Error types for the qroute crate

use thiserror::Error;

/// Main error type for the qroute crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("duplicate state label '{label}'")]
    DuplicateState { label: String },

    #[error("edge ({from}, {to}) references unknown state '{unknown}'")]
    UnknownEdgeEndpoint {
        from: String,
        to: String,
        unknown: String,
    },

    #[error("unknown state '{label}'")]
    UnknownState { label: String },

    #[error("network must contain at least one state")]
    EmptyStateSpace,

    #[error("discount factor {value} out of range (expected 0 < gamma < 1)")]
    InvalidDiscountFactor { value: f64 },

    #[error("learning rate {value} out of range (expected 0 < alpha <= 1)")]
    InvalidLearningRate { value: f64 },

    #[error("episode count must be positive")]
    InvalidEpisodeCount,

    #[error(
        "terminal reward {terminal} does not dominate: must exceed base * (1 + gamma) = {required}"
    )]
    TerminalRewardTooSmall { terminal: f64, required: f64 },

    #[error("reward {value} must be positive and finite")]
    InvalidReward { value: f64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
