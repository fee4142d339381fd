//! Training infrastructure.
//!
//! - [`Trainer`]: the SGD loop producing a [`crate::predictor::Predictor`]
//! - [`TrainerParams`]: learning rate, epoch budget, seed, verbosity
//! - [`TrainingPhase`]: periodic error/accuracy snapshots
//! - [`TrainingLogger`]: verbosity-gated progress output
//! - [`metric`]: error and accuracy computation shared with callers

mod logger;
pub mod metric;
mod trainer;

pub use logger::{TrainingLogger, Verbosity};
pub use trainer::{TrainError, TrainOutput, Trainer, TrainerParams, TrainingPhase};
