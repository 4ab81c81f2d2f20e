use crate::error::NetError;
use crate::math::rounding::Rounding;
use crate::optim::sgd::Sgd;
use crate::train::dataset::TrainingExample;

/// A complete weight state that can predict and learn from one example.
///
/// Training never mutates a model in place: `train_example` returns the
/// next weight state alongside the squared error of the prediction it made,
/// so the trainer stays the sole owner of the current weights.
pub trait Model: Clone {
    /// Unrounded forward pass.
    fn predict(&self, input: &[f64]) -> Result<Vec<f64>, NetError>;

    /// Forward, error, backward and update for a single example.
    ///
    /// The returned error is measured on the prediction *before* the update.
    fn train_example(
        &self,
        example: &TrainingExample,
        optimizer: &Sgd,
        rounding: Rounding,
    ) -> Result<(Self, f64), NetError>;
}
