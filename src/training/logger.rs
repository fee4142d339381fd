//! Verbosity-gated training progress output.

use super::trainer::TrainingPhase;

/// How much training progress to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No output. Use in tests and embedded callers.
    Silent,
    /// Start/finish lines plus snapshot metrics.
    #[default]
    Info,
    /// Everything, including per-class progress in one-vs-rest training.
    Debug,
}

/// Writes training progress to stdout according to a verbosity level.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Log a free-form informational line.
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Info {
            println!("{message}");
        }
    }

    /// Log a debug-level line.
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            println!("{message}");
        }
    }

    pub fn start_training(&self, max_epoch: u32, n_rows: usize) {
        self.info(&format!(
            "Starting training: {max_epoch} epochs, {n_rows} rows"
        ));
    }

    /// Log one snapshot line, e.g. `[   10] error:0.2412  accuracy:0.7500`.
    pub fn log_phase(&self, phase: &TrainingPhase) {
        self.info(&format!(
            "[{:5}] error:{:.4}  accuracy:{:.4}",
            phase.epoch, phase.error, phase.accuracy
        ));
    }

    pub fn finish_training(&self, accuracy: f64, error: f64) {
        self.info(&format!(
            "Training complete: accuracy {accuracy:.4}, error {error:.4}"
        ));
    }
}
