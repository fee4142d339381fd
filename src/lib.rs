//! logit: logistic regression trained with stochastic gradient descent.
//!
//! This crate provides a small, auditable training engine for linear binary
//! classifiers over tabular data, plus a one-vs-rest composer for multi-class
//! prediction. Record types plug into the trainer through encoding traits;
//! parsing raw text and formatting output stay outside the crate.

pub mod encoding;
pub mod multiclass;
pub mod predictor;
pub mod random;
pub mod scaling;
pub mod training;
