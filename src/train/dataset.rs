use serde::{Serialize, Deserialize};

use crate::error::{ensure_same_len, NetError};

/// One input vector paired with the values the model should produce for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, expected: Vec<f64>) -> TrainingExample {
        TrainingExample { input, expected }
    }

    /// Example with a single expected output.
    pub fn scalar(input: Vec<f64>, expected: f64) -> TrainingExample {
        TrainingExample { input, expected: vec![expected] }
    }
}

/// Examples in traversal order. Epochs walk it front to back, never shuffled.
pub type Dataset = Vec<TrainingExample>;

/// Pairs inputs with targets in order; both slices must have equal length.
pub fn zip_dataset(inputs: &[Vec<f64>], expected: &[Vec<f64>]) -> Result<Dataset, NetError> {
    ensure_same_len("zip_dataset", inputs.len(), expected.len())?;
    Ok(inputs.iter().zip(expected.iter())
        .map(|(i, e)| TrainingExample::new(i.clone(), e.clone()))
        .collect())
}
