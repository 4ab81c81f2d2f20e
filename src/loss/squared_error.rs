use crate::error::{ensure_same_len, NetError};

/// Squared error, summed and never averaged.
pub struct SquaredError;

impl SquaredError {
    /// Per-output `(predicted - expected)²`.
    pub fn per_output(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>, NetError> {
        ensure_same_len("SquaredError::per_output", expected.len(), predicted.len())?;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(p, e)| (p - e).powi(2))
            .collect())
    }

    /// Sum of the per-output errors for one example.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64, NetError> {
        Ok(Self::per_output(predicted, expected)?.iter().sum())
    }

    pub fn accumulate(running_total: f64, error: f64) -> f64 {
        running_total + error
    }
}
