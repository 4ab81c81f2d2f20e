use tracing::{debug, info, warn};

use crate::error::NetError;
use crate::loss::squared_error::SquaredError;
use crate::optim::sgd::Sgd;
use crate::train::dataset::Dataset;
use crate::train::epoch_result::{EpochResult, TrainingOutcome};
use crate::train::model::Model;
use crate::train::train_config::TrainConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingState {
    Running,
    /// An epoch's error reached the tolerance; no further epochs run.
    Terminated,
}

/// Owns one weight state and drives per-example gradient descent over a
/// dataset, one epoch at a time.
///
/// Each example's forward, error, backward and update step finishes before
/// the next example starts, so every prediction sees the weights left by the
/// previous example.
#[derive(Debug)]
pub struct Trainer<M: Model> {
    weights: M,
    dataset: Dataset,
    optimizer: Sgd,
    config: TrainConfig,
    epoch: usize,
    last_error: Option<f64>,
    state: TrainingState,
}

impl<M: Model> Trainer<M> {
    pub fn new(weights: M, dataset: Dataset, config: TrainConfig) -> Trainer<M> {
        Trainer {
            weights,
            dataset,
            optimizer: Sgd::new(config.learning_rate),
            config,
            epoch: 0,
            last_error: None,
            state: TrainingState::Running,
        }
    }

    pub fn weights(&self) -> &M {
        &self.weights
    }

    pub fn into_weights(self) -> M {
        self.weights
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    /// Number of completed epochs.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn last_error(&self) -> Option<f64> {
        self.last_error
    }

    /// Runs one pass over the dataset in order.
    ///
    /// If any example fails, the error is returned and the trainer keeps the
    /// weights it had before the epoch started. Once terminated, this returns
    /// the last result again without touching the weights.
    pub fn run_epoch(&mut self) -> Result<EpochResult<M>, NetError> {
        if self.state == TrainingState::Terminated {
            return Ok(self.snapshot());
        }

        let epoch = self.epoch + 1;
        let mut weights = self.weights.clone();
        let mut total = 0.0;

        for (index, example) in self.dataset.iter().enumerate() {
            let (next, error) = weights.train_example(example, &self.optimizer, self.config.rounding)?;
            debug!(epoch, example = index, error, "example trained");
            total = SquaredError::accumulate(total, error);
            weights = next;
        }

        self.weights = weights;
        self.epoch = epoch;
        self.last_error = Some(total);

        if !total.is_finite() {
            warn!(epoch, error = total, "epoch error is not finite; training is diverging");
        }
        info!(epoch, error = total, "epoch finished");

        if total <= self.config.tolerance {
            info!(epoch, error = total, "converged");
            self.state = TrainingState::Terminated;
        }

        Ok(self.snapshot())
    }

    /// Runs epochs until the error converges, reporting each one to
    /// `observer`.
    ///
    /// Fails with `NetError::NonTermination` once `max_epochs` epochs have
    /// completed without converging; the trainer keeps the weights reached so
    /// far.
    pub fn run_until_converged<F>(&mut self, mut observer: F) -> Result<TrainingOutcome<M>, NetError>
    where
        F: FnMut(&EpochResult<M>),
    {
        while self.state == TrainingState::Running {
            if self.epoch >= self.config.max_epochs {
                let last_error = self.last_error.unwrap_or(f64::NAN);
                warn!(epochs = self.epoch, last_error, "epoch budget exhausted");
                return Err(NetError::NonTermination { epochs: self.epoch, last_error });
            }
            let result = self.run_epoch()?;
            observer(&result);
        }

        Ok(TrainingOutcome {
            epochs: self.epoch,
            error: self.last_error.unwrap_or(f64::NAN),
            weights: self.weights.clone(),
        })
    }

    /// Runs exactly `epochs` epochs, or fewer if training converges first.
    /// Never fails for lack of convergence.
    pub fn run_epochs<F>(&mut self, epochs: usize, mut observer: F) -> Result<Vec<EpochResult<M>>, NetError>
    where
        F: FnMut(&EpochResult<M>),
    {
        let mut results = Vec::with_capacity(epochs);
        for _ in 0..epochs {
            if self.state == TrainingState::Terminated {
                break;
            }
            let result = self.run_epoch()?;
            observer(&result);
            results.push(result);
        }
        Ok(results)
    }

    fn snapshot(&self) -> EpochResult<M> {
        EpochResult {
            epoch: self.epoch,
            error: self.last_error.unwrap_or(f64::NAN),
            weights: self.weights.clone(),
        }
    }
}
