use serde::{Serialize, Deserialize};

use crate::error::NetError;
use crate::math::rounding::Rounding;

/// Configuration for a `Trainer` run.
///
/// # Fields
/// - `learning_rate` — alpha; `0.0` trains nothing but still reports error
/// - `max_epochs`    — epoch ceiling; running past it without converging is
///                     `NetError::NonTermination`
/// - `tolerance`     — an epoch whose summed squared error is `<= tolerance`
///                     ends training; `0.0` means exactly zero
/// - `rounding`      — applied to each final prediction before the error and
///                     deltas are computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    #[serde(default = "default_max_epochs")]
    pub max_epochs: usize,
    #[serde(default)]
    pub tolerance: f64,
    #[serde(default)]
    pub rounding: Rounding,
}

fn default_max_epochs() -> usize {
    1000
}

impl TrainConfig {
    /// Exact-zero convergence, no rounding, default epoch ceiling.
    pub fn new(learning_rate: f64) -> Self {
        TrainConfig {
            learning_rate,
            max_epochs: default_max_epochs(),
            tolerance: 0.0,
            rounding: Rounding::Exact,
        }
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<TrainConfig, NetError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
