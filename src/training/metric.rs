//! Error and accuracy over predicted probabilities.
//!
//! Kept separate from the trainer so the same computation serves both the
//! training snapshots and independent recomputation by callers.

/// Mean squared error between probabilities and 0/1 targets.
pub fn mean_squared_error(probabilities: &[f64], targets: &[f64]) -> f64 {
    debug_assert_eq!(probabilities.len(), targets.len());
    debug_assert!(!probabilities.is_empty());

    let sum: f64 = probabilities
        .iter()
        .zip(targets)
        .map(|(p, y)| (p - y) * (p - y))
        .sum();
    sum / probabilities.len() as f64
}

/// Classification accuracy at threshold 0.5.
///
/// `y = 0` counts as correct iff `p < 0.5`; `y = 1` iff `p >= 0.5`. The
/// boundary `p == 0.5` therefore goes to class 1.
pub fn accuracy(probabilities: &[f64], targets: &[f64]) -> f64 {
    debug_assert_eq!(probabilities.len(), targets.len());
    debug_assert!(!probabilities.is_empty());

    let correct = probabilities
        .iter()
        .zip(targets)
        .filter(|(&p, &y)| if y < 0.5 { p < 0.5 } else { p >= 0.5 })
        .count();
    correct as f64 / probabilities.len() as f64
}
