use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{
    activation::relu::Relu,
    error::{ensure_same_len, NetError},
    loss::squared_error::SquaredError,
    math::{matrix::Matrix, rounding::Rounding, vector},
    optim::sgd::Sgd,
    train::{dataset::TrainingExample, model::Model},
};

/// One relu hidden layer feeding a single linear output unit.
///
/// `hidden` is stored hidden-rows-first (`hidden_size × input_size`), and
/// `output` has one weight per hidden unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoLayerNetwork {
    pub hidden: Matrix,
    pub output: Vec<f64>,
}

/// Values realized by a forward pass, reused unchanged by the backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCache {
    /// Relu outputs of the hidden layer.
    pub hidden: Vec<f64>,
    pub output: f64,
}

/// Gradients shaped exactly like the weights they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoLayerGradients {
    pub hidden: Matrix,
    pub output: Vec<f64>,
}

impl TwoLayerNetwork {
    pub fn new(hidden: Matrix, output: Vec<f64>) -> Result<TwoLayerNetwork, NetError> {
        ensure_same_len("TwoLayerNetwork::new", hidden.rows, output.len())?;
        Ok(TwoLayerNetwork { hidden, output })
    }

    /// All weights drawn uniformly from `[0, 1)`, hidden layer first.
    pub fn random<R: Rng>(input_size: usize, hidden_size: usize, rng: &mut R) -> TwoLayerNetwork {
        let hidden = Matrix::random_uniform(hidden_size, input_size, rng);
        let output = (0..hidden_size).map(|_| rng.gen::<f64>()).collect();
        TwoLayerNetwork { hidden, output }
    }

    pub fn input_size(&self) -> usize {
        self.hidden.cols
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden.rows
    }

    pub fn forward(&self, input: &[f64]) -> Result<ForwardCache, NetError> {
        let hidden = Relu::function(&self.hidden.matvec(input)?);
        let output = vector::dot(&hidden, &self.output)?;
        Ok(ForwardCache { hidden, output })
    }

    /// Backpropagates `prediction - expected` through the network.
    ///
    /// No learning rate is applied here. Dead hidden units (relu output of
    /// zero) get an all-zero row in the hidden gradient.
    pub fn backward(
        &self,
        input: &[f64],
        hidden: &[f64],
        prediction: f64,
        expected: f64,
    ) -> Result<TwoLayerGradients, NetError> {
        ensure_same_len("TwoLayerNetwork::backward (input)", self.input_size(), input.len())?;
        ensure_same_len("TwoLayerNetwork::backward (hidden)", self.hidden_size(), hidden.len())?;

        let output_delta = prediction - expected;
        let hidden_delta = vector::elementwise_multiply(
            &vector::scale(&self.output, output_delta),
            &Relu::derivative(hidden),
        )?;

        Ok(TwoLayerGradients {
            hidden: vector::outer_product(&hidden_delta, input),
            output: vector::scale(hidden, output_delta),
        })
    }

    /// Applies both gradients, each scaled by the learning rate exactly once.
    pub fn apply(&self, gradients: &TwoLayerGradients, optimizer: &Sgd) -> Result<TwoLayerNetwork, NetError> {
        Ok(TwoLayerNetwork {
            hidden: optimizer.step_matrix(&self.hidden, &gradients.hidden)?,
            output: optimizer.step_vector(&self.output, &gradients.output)?,
        })
    }
}

impl Model for TwoLayerNetwork {
    fn predict(&self, input: &[f64]) -> Result<Vec<f64>, NetError> {
        Ok(vec![self.forward(input)?.output])
    }

    fn train_example(
        &self,
        example: &TrainingExample,
        optimizer: &Sgd,
        rounding: Rounding,
    ) -> Result<(Self, f64), NetError> {
        ensure_same_len("TwoLayerNetwork::train_example (expected)", 1, example.expected.len())?;
        let expected = example.expected[0];

        let cache = self.forward(&example.input)?;
        let prediction = rounding.apply(cache.output);
        let error = SquaredError::loss(&[prediction], &[expected])?;

        let gradients = self.backward(&example.input, &cache.hidden, prediction, expected)?;
        Ok((self.apply(&gradients, optimizer)?, error))
    }
}
