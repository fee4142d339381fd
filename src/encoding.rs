//! Encoding contracts between domain records and the training engine.
//!
//! A record type participates in training through two roles: as an *input*
//! it encodes to a fixed-length feature vector ([`PredictionInput`]), and as
//! a *result* it encodes to a 0/1 training target ([`BinaryResult`]) or, for
//! multi-class targets, projects itself onto per-class indicators
//! ([`MultiClassResult`]).
//!
//! Encoding layout invariant: continuous fields occupy fixed single slots;
//! categorical fields are one-hot encoded into a contiguous group whose width
//! equals the category count. The slot assignment must be identical between
//! training and inference for a given input type.

/// A record that encodes itself to a fixed-length numeric feature vector.
///
/// The output length must be constant per implementing type, and the
/// encoding must be a pure function of the record's fields. Each one-hot
/// group carries exactly one `1.0` with the rest of the group at `0.0`.
pub trait PredictionInput {
    fn encode(&self) -> Vec<f64>;
}

/// Set the one-hot slot for a categorical value.
///
/// Marks `buf[offset + index] = 1.0` inside a group of `count` slots.
///
/// # Panics
///
/// Panics if `index >= count` or the group does not fit in `buf`; an unknown
/// category is a programming error in the encoder, not a recoverable state.
pub fn mark_one_hot(buf: &mut [f64], offset: usize, index: usize, count: usize) {
    assert!(
        index < count,
        "one-hot index {index} out of range for group of {count}"
    );
    assert!(
        offset + count <= buf.len(),
        "one-hot group [{offset}, {}) exceeds vector length {}",
        offset + count,
        buf.len()
    );
    buf[offset + index] = 1.0;
}

/// A result that encodes itself to a binary training target.
///
/// The returned value must be exactly `0.0` or `1.0`.
pub trait BinaryResult {
    fn encode(&self) -> f64;
}

/// Maps a predicted probability back to a domain label.
///
/// The threshold scheme is family-specific: a plain 0.5 cut for two-valued
/// results, or e.g. a tri-level mapping for an ordinal-like target expressed
/// as a single probability.
pub trait BinaryDecoder {
    type Output;

    fn decode(&self, probability: f64) -> Self::Output;
}

/// Binarized view of one class of a multi-class result.
///
/// Wraps the "belongs to this class" indicator produced by
/// [`MultiClassResult::separate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassIndicator(pub bool);

impl BinaryResult for ClassIndicator {
    fn encode(&self) -> f64 {
        if self.0 {
            1.0
        } else {
            0.0
        }
    }
}

/// A result drawn from `CLASS_COUNT` mutually exclusive classes.
///
/// `separate` must partition classes disjointly and exhaustively: for any
/// instance, exactly one class index yields `ClassIndicator(true)`.
pub trait MultiClassResult {
    /// Number of classes, `K >= 2`.
    const CLASS_COUNT: usize;

    /// Project this label onto a 0/1 indicator for one class.
    ///
    /// # Panics
    ///
    /// Implementations panic when `class_index >= CLASS_COUNT`; calling
    /// outside the class range is a programming error.
    fn separate(&self, class_index: usize) -> ClassIndicator;
}

/// Aggregates per-class probabilities into a domain label.
pub trait MultiClassDecoder {
    type Output: MultiClassResult;

    /// Decode one probability per class into the winning label.
    ///
    /// Implementations should route through [`crate::multiclass::argmax_class`]
    /// so tie-breaking stays uniform across decoders.
    fn decode(&self, probabilities: &[f64]) -> Self::Output;
}
