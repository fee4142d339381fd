//! Normalization of continuous fields before encoding.
//!
//! A [`ScalingFunction`] is fitted once on the training set and reapplied to
//! every subsequent input, training and inference alike. Each continuous
//! field is divided by the power of ten rounding up its observed maximum, so
//! scaled values land in `(0, 1]` without look-ahead bias from test data.

use thiserror::Error;

/// A record whose continuous fields can be rescaled.
///
/// `continuous` exposes the continuous field values in a fixed order;
/// `rescale` rebuilds the record with each of those fields divided by the
/// paired divisor. Both must agree on field order and count.
pub trait Scalable: Sized {
    /// Continuous field values, in the same order `rescale` expects divisors.
    fn continuous(&self) -> Vec<f64>;

    /// Copy of the record with each continuous field divided by its divisor.
    fn rescale(&self, divisors: &[f64]) -> Self;
}

/// Errors from fitting a scaling function.
#[derive(Debug, Clone, Error)]
pub enum ScalingError {
    #[error("cannot derive scaling from an empty training set")]
    EmptyTrainingSet,

    #[error("continuous field {field} has non-positive maximum {max}; log10 scale is undefined")]
    NonPositiveMaximum { field: usize, max: f64 },
}

/// Per-dataset transform dividing continuous fields by fixed divisors.
///
/// Holds the derived divisors explicitly so the transform can be inspected
/// and tested independently of the data it was fitted on.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingFunction {
    divisors: Vec<f64>,
}

impl ScalingFunction {
    /// Fit divisors from the training set.
    ///
    /// For each continuous field, takes the true maximum over all rows and
    /// rounds it up to the nearest power of ten: `10^ceil(log10(max))`.
    /// A maximum of zero or below would produce a NaN or infinite divisor,
    /// so it fails with [`ScalingError::NonPositiveMaximum`] instead.
    pub fn fit<I: Scalable>(rows: &[I]) -> Result<Self, ScalingError> {
        let first = rows.first().ok_or(ScalingError::EmptyTrainingSet)?;
        let mut maxima = first.continuous();

        for row in &rows[1..] {
            for (max, value) in maxima.iter_mut().zip(row.continuous()) {
                if value > *max {
                    *max = value;
                }
            }
        }

        let mut divisors = Vec::with_capacity(maxima.len());
        for (field, &max) in maxima.iter().enumerate() {
            if max <= 0.0 {
                return Err(ScalingError::NonPositiveMaximum { field, max });
            }
            divisors.push(10f64.powf(max.log10().ceil()));
        }

        Ok(Self { divisors })
    }

    /// A no-op transform for inputs that are already normalized.
    pub fn identity() -> Self {
        Self { divisors: Vec::new() }
    }

    /// Apply the transform, producing a rescaled copy of the input.
    ///
    /// The identity transform passes any input through unchanged. Otherwise
    /// the input's continuous field count must match the fitted divisors;
    /// a mismatch means the transform was fitted on a different record shape,
    /// which is a programming error.
    pub fn apply<I: Scalable + Clone>(&self, input: &I) -> I {
        if self.divisors.is_empty() {
            return input.clone();
        }
        assert_eq!(
            input.continuous().len(),
            self.divisors.len(),
            "scaling function fitted for {} continuous fields",
            self.divisors.len()
        );
        input.rescale(&self.divisors)
    }

    /// The fitted divisors, one per continuous field.
    pub fn divisors(&self) -> &[f64] {
        &self.divisors
    }
}
