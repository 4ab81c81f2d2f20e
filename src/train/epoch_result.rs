use serde::Serialize;

/// What one finished epoch reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochResult<M> {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Summed squared error over every example and output of this epoch.
    pub error: f64,
    /// Weights after the last example of this epoch.
    pub weights: M,
}

/// Final state of a converged run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingOutcome<M> {
    pub epochs: usize,
    pub error: f64,
    pub weights: M,
}
