//! Stochastic gradient descent for logistic regression.
//!
//! The trainer runs online (per-row) updates on squared error through the
//! logistic function: weights start uniform in `[-0.01, 0.01)`, the row
//! order is reshuffled every epoch, and error/accuracy snapshots are taken
//! at a tenth of the epoch budget. Training runs to completion
//! synchronously; there is no pause, cancellation, or early stopping.
//!
//! # Example
//!
//! ```ignore
//! use logit::training::{Trainer, TrainerParams, Verbosity};
//!
//! let params = TrainerParams {
//!     learning_rate: 0.05,
//!     max_epoch: 1000,
//!     ..Default::default()
//! };
//! let output = Trainer::new(params).train(&data, &scaling)?;
//! println!("accuracy {:.4}", output.predictor.accuracy());
//! ```

use thiserror::Error;

use super::logger::TrainingLogger;
use super::metric;
use super::Verbosity;
use crate::encoding::{BinaryResult, PredictionInput};
use crate::predictor::{probability, Predictor};
use crate::random::{shuffle, RandomSource, XoshiroSource};
use crate::scaling::{Scalable, ScalingError, ScalingFunction};

/// Weight initialization bounds.
const INIT_LO: f64 = -0.01;
const INIT_HI: f64 = 0.01;

/// Parameters for SGD training.
///
/// Use struct construction with `..Default::default()`:
///
/// ```
/// use logit::training::TrainerParams;
///
/// let params = TrainerParams {
///     max_epoch: 500,
///     seed: 7,
///     ..Default::default()
/// };
/// assert_eq!(params.learning_rate, 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct TrainerParams {
    /// Step size for weight updates. Must be positive.
    pub learning_rate: f64,

    /// Epoch budget. The loop runs epochs `0..=max_epoch` inclusive.
    pub max_epoch: u32,

    /// Seed for weight initialization and per-epoch shuffling.
    pub seed: u64,

    /// Verbosity of training output.
    pub verbosity: Verbosity,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_epoch: 100,
            seed: 0,
            verbosity: Verbosity::default(),
        }
    }
}

/// Snapshot of training progress at one epoch.
///
/// Error and accuracy are computed over the entire training set, not the
/// current row. Snapshots are diagnostics only; nothing downstream consumes
/// them except logging.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPhase {
    pub epoch: u32,
    /// Mean squared error over the training set.
    pub error: f64,
    /// Accuracy at threshold 0.5 over the training set.
    pub accuracy: f64,
}

/// Result of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainOutput {
    pub predictor: Predictor,
    /// Snapshots in epoch order.
    pub phases: Vec<TrainingPhase>,
}

/// Configuration errors surfaced before any training work is performed.
#[derive(Debug, Clone, Error)]
pub enum TrainError {
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("learning rate must be positive, got {0}")]
    NonPositiveLearningRate(f64),

    #[error("inconsistent feature length at row {row}: expected {expected}, got {got}")]
    InconsistentFeatureLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("number of targets ({targets}) does not match number of rows ({rows})")]
    TargetLenMismatch { rows: usize, targets: usize },

    #[error(transparent)]
    Scaling(#[from] ScalingError),
}

/// Binary training engine.
///
/// Generic over the record types through the encoding traits: any input
/// implementing [`PredictionInput`] + [`Scalable`] trains against any result
/// implementing [`BinaryResult`].
#[derive(Debug, Clone)]
pub struct Trainer {
    params: TrainerParams,
}

impl Trainer {
    pub fn new(params: TrainerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TrainerParams {
        &self.params
    }

    /// Train on typed records.
    ///
    /// Applies the scaling function to every input, encodes, and runs SGD.
    /// The scaling function is captured into the returned predictor so
    /// inference normalizes inputs identically.
    pub fn train<I, R>(
        &self,
        data: &[(I, R)],
        scaling: &ScalingFunction,
    ) -> Result<TrainOutput, TrainError>
    where
        I: PredictionInput + Scalable + Clone,
        R: BinaryResult,
    {
        let features: Vec<Vec<f64>> = data
            .iter()
            .map(|(input, _)| scaling.apply(input).encode())
            .collect();
        let targets: Vec<f64> = data.iter().map(|(_, result)| result.encode()).collect();

        self.train_encoded(&features, &targets, scaling)
    }

    /// Train on rows that are already scaled and encoded.
    ///
    /// The one-vs-rest composer uses this entry so all per-class runs share
    /// one encoded matrix.
    pub fn train_encoded(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        scaling: &ScalingFunction,
    ) -> Result<TrainOutput, TrainError> {
        let mut rng = XoshiroSource::seed_from_u64(self.params.seed);
        self.train_encoded_with(features, targets, scaling, &mut rng)
    }

    /// Train with an injected random source.
    pub fn train_encoded_with(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        scaling: &ScalingFunction,
        rng: &mut dyn RandomSource,
    ) -> Result<TrainOutput, TrainError> {
        self.validate(features, targets)?;

        let n_rows = features.len();
        let n_features = features[0].len();
        let lr = self.params.learning_rate;
        let max_epoch = self.params.max_epoch;
        let logger = TrainingLogger::new(self.params.verbosity);

        logger.start_training(max_epoch, n_rows);

        // Weight vector with the bias in the last slot.
        let mut weights: Vec<f64> = (0..n_features + 1)
            .map(|_| (INIT_HI - INIT_LO) * rng.uniform() + INIT_LO)
            .collect();

        let mut indices: Vec<usize> = (0..n_rows).collect();
        let snapshot_interval = (max_epoch / 10).max(1);
        let mut phases = Vec::new();

        for epoch in 0..=max_epoch {
            shuffle(&mut indices, rng);

            for &i in &indices {
                let x = &features[i];
                let y = targets[i];
                let p = probability(x, &weights);

                let g = lr * (y - p) * p * (1.0 - p);
                for (w, &xj) in weights[..n_features].iter_mut().zip(x) {
                    *w += g * xj;
                }
                weights[n_features] += g;
            }

            if epoch % snapshot_interval == 0 {
                let phase = TrainingPhase {
                    epoch,
                    error: Self::error_over(features, targets, &weights),
                    accuracy: Self::accuracy_over(features, targets, &weights),
                };
                logger.log_phase(&phase);
                phases.push(phase);
            }
        }

        let error = Self::error_over(features, targets, &weights);
        let accuracy = Self::accuracy_over(features, targets, &weights);
        logger.finish_training(accuracy, error);

        Ok(TrainOutput {
            predictor: Predictor::from_training(weights, scaling.clone(), accuracy, error),
            phases,
        })
    }

    /// Shape validation, run before any weight initialization.
    fn validate(&self, features: &[Vec<f64>], targets: &[f64]) -> Result<(), TrainError> {
        if self.params.learning_rate <= 0.0 {
            return Err(TrainError::NonPositiveLearningRate(
                self.params.learning_rate,
            ));
        }
        if features.is_empty() {
            return Err(TrainError::EmptyTrainingSet);
        }
        if targets.len() != features.len() {
            return Err(TrainError::TargetLenMismatch {
                rows: features.len(),
                targets: targets.len(),
            });
        }

        let expected = features[0].len();
        for (row, x) in features.iter().enumerate() {
            if x.len() != expected {
                return Err(TrainError::InconsistentFeatureLength {
                    row,
                    expected,
                    got: x.len(),
                });
            }
        }

        debug_assert!(
            targets.iter().all(|&y| y == 0.0 || y == 1.0),
            "binary targets must encode to exactly 0.0 or 1.0"
        );
        Ok(())
    }

    fn error_over(features: &[Vec<f64>], targets: &[f64], weights: &[f64]) -> f64 {
        let probs: Vec<f64> = features.iter().map(|x| probability(x, weights)).collect();
        metric::mean_squared_error(&probs, targets)
    }

    fn accuracy_over(features: &[Vec<f64>], targets: &[f64], weights: &[f64]) -> f64 {
        let probs: Vec<f64> = features.iter().map(|x| probability(x, weights)).collect();
        metric::accuracy(&probs, targets)
    }
}
