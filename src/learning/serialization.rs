//! Serialization support for trained route models.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::learning::trainer::{TrainedModel, TrainingReport};

/// Versioned on-disk envelope for a trained model.
///
/// Persists the N×N Q table, the label↔index bijection, the goal, and the
/// training run's metadata, encoded as MessagePack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedModel {
    pub version: u32,
    model: TrainedModel,
    pub report: TrainingReport,
}

impl SavedModel {
    /// Current save format version
    pub const VERSION: u32 = 1;

    pub fn new(model: TrainedModel, report: TrainingReport) -> Self {
        Self {
            version: Self::VERSION,
            model,
            report,
        }
    }

    /// Unpack the model, rejecting unsupported format versions.
    pub fn into_model(self) -> Result<TrainedModel> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported model save format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }
        Ok(self.model)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, self).context("Failed to serialize model")?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize model")
    }
}
