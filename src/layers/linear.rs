use serde::{Serialize, Deserialize};

use crate::{
    error::{ensure_same_len, NetError},
    loss::squared_error::SquaredError,
    math::{matrix::Matrix, rounding::Rounding, vector},
    optim::sgd::Sgd,
    train::{dataset::TrainingExample, model::Model},
};

/// Single linear layer with any number of inputs and outputs.
///
/// `weights` holds one row per output unit; each output is the dot product of
/// the input with its row. There is no activation and no bias, and outputs
/// never interact during training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearLayer {
    pub weights: Matrix,
}

impl LinearLayer {
    pub fn new(weights: Matrix) -> LinearLayer {
        LinearLayer { weights }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<LinearLayer, NetError> {
        Ok(LinearLayer { weights: Matrix::from_rows(rows)? })
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows
    }

    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, NetError> {
        self.weights.matvec(input)
    }

    /// Correction matrix with the learning rate already folded in:
    /// `correction[i][j] = alpha * (predicted[i] - expected[i]) * input[j]`.
    ///
    /// Same shape as `weights`.
    pub fn correction(
        &self,
        input: &[f64],
        predicted: &[f64],
        expected: &[f64],
        alpha: f64,
    ) -> Result<Matrix, NetError> {
        ensure_same_len("LinearLayer::correction (input)", self.input_size(), input.len())?;
        ensure_same_len("LinearLayer::correction (predicted)", self.output_size(), predicted.len())?;
        let deltas = vector::scale(&vector::subtract(predicted, expected)?, alpha);
        Ok(vector::outer_product(&deltas, input))
    }
}

impl Model for LinearLayer {
    fn predict(&self, input: &[f64]) -> Result<Vec<f64>, NetError> {
        LinearLayer::predict(self, input)
    }

    fn train_example(
        &self,
        example: &TrainingExample,
        optimizer: &Sgd,
        rounding: Rounding,
    ) -> Result<(Self, f64), NetError> {
        let predicted = rounding.apply_all(&self.predict(&example.input)?);
        let error = SquaredError::loss(&predicted, &example.expected)?;

        let correction = self.correction(
            &example.input,
            &predicted,
            &example.expected,
            optimizer.learning_rate,
        )?;
        let weights = optimizer.apply_correction(&self.weights, &correction)?;

        Ok((LinearLayer { weights }, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_multi_input_single_output() {
        let layer = LinearLayer::from_rows(vec![vec![6.2, 8.1, 0.31]]).unwrap();
        let out = layer.predict(&[30.0, 3.0, 80.0]).unwrap();
        assert!((out[0] - 235.1).abs() < 1e-9);
    }

    #[test]
    fn correction_matches_weight_shape() {
        let layer = LinearLayer::new(Matrix::zeros(3, 2));
        let c = layer.correction(&[1.0, 2.0], &[1.0, 0.0, 3.0], &[0.0, 0.0, 1.0], 0.5).unwrap();
        assert_eq!((c.rows, c.cols), (3, 2));
        assert_eq!(c.data, vec![vec![0.5, 1.0], vec![0.0, 0.0], vec![1.0, 2.0]]);
    }

    #[test]
    fn rejects_input_of_wrong_length() {
        let layer = LinearLayer::new(Matrix::zeros(1, 3));
        let example = TrainingExample::scalar(vec![1.0, 2.0], 0.0);
        let err = layer.train_example(&example, &Sgd::new(0.1), Rounding::Exact).unwrap_err();
        assert!(matches!(err, NetError::DimensionMismatch { .. }));
    }

    #[test]
    fn single_weight_step_moves_toward_target() {
        let layer = LinearLayer::from_rows(vec![vec![10.0]]).unwrap();
        let example = TrainingExample::scalar(vec![0.2], 8.0);
        let (next, error) = layer
            .train_example(&example, &Sgd::new(24.0), Rounding::Decimals(2))
            .unwrap();
        assert!((error - 36.0).abs() < 1e-9);
        assert!((next.weights.data[0][0] - 38.8).abs() < 1e-9);
    }
}
