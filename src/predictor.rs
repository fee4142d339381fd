//! Trained model artifact and inference.
//!
//! A [`Predictor`] owns its weight vector (bias in the last slot), the
//! scaling function it was trained with, and summary statistics computed
//! over the training set. It is constructed only by training and never
//! mutated afterwards; retraining produces a new instance.

use crate::encoding::PredictionInput;
use crate::scaling::{Scalable, ScalingFunction};

/// Logistic function with saturation outside `[-20, 20]`.
///
/// Extreme logits clamp to exactly `0.0` or `1.0` instead of risking
/// overflow in `exp`; the saturation is silent and deterministic.
pub fn sigmoid(z: f64) -> f64 {
    if z < -20.0 {
        0.0
    } else if z > 20.0 {
        1.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}

/// Probability for an encoded row under a weight vector with trailing bias.
pub(crate) fn probability(features: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(features.len() + 1, weights.len());
    let (coefficients, bias) = weights.split_at(weights.len() - 1);
    let z: f64 = features
        .iter()
        .zip(coefficients)
        .map(|(x, w)| x * w)
        .sum::<f64>()
        + bias[0];
    sigmoid(z)
}

/// An immutable trained binary classifier.
#[derive(Debug, Clone)]
pub struct Predictor {
    /// Length = feature count + 1; the last element is the bias.
    weights: Vec<f64>,
    scaling: ScalingFunction,
    accuracy: f64,
    error: f64,
}

impl Predictor {
    pub(crate) fn from_training(
        weights: Vec<f64>,
        scaling: ScalingFunction,
        accuracy: f64,
        error: f64,
    ) -> Self {
        Self {
            weights,
            scaling,
            accuracy,
            error,
        }
    }

    /// Probability that the input belongs to class 1.
    ///
    /// Applies the captured scaling function, encodes, and runs the logistic
    /// score. Returns the raw probability; thresholding into a label is the
    /// caller's or decoder's responsibility.
    pub fn predict<I: PredictionInput + Scalable + Clone>(&self, input: &I) -> f64 {
        self.predict_encoded(&self.scaling.apply(input).encode())
    }

    /// Probability for an already scaled and encoded feature vector.
    ///
    /// # Panics
    ///
    /// Panics if the vector length does not match the trained feature count;
    /// feeding a differently-shaped encoding is a programming error.
    pub fn predict_encoded(&self, features: &[f64]) -> f64 {
        assert_eq!(
            features.len(),
            self.num_features(),
            "encoded input length {} does not match model trained on {} features",
            features.len(),
            self.num_features()
        );
        probability(features, &self.weights)
    }

    /// Trained weights, bias in the last slot.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Trained bias term.
    pub fn bias(&self) -> f64 {
        self.weights[self.weights.len() - 1]
    }

    /// Number of input features (excludes the bias slot).
    pub fn num_features(&self) -> usize {
        self.weights.len() - 1
    }

    /// Classification accuracy on the training set with the final weights.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Mean squared error on the training set with the final weights.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// The scaling function captured at training time.
    pub fn scaling(&self) -> &ScalingFunction {
        &self.scaling
    }
}
