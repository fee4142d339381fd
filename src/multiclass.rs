//! One-vs-rest composition of binary classifiers.
//!
//! For a result type with `K` classes, training binarizes the target once
//! per class and runs the binary engine `K` times over the same scaled and
//! encoded inputs. Inference queries all `K` predictors and picks the class
//! with the highest probability.

use rayon::prelude::*;

use crate::encoding::{BinaryResult, MultiClassDecoder, MultiClassResult, PredictionInput};
use crate::predictor::Predictor;
use crate::scaling::{Scalable, ScalingFunction};
use crate::training::{TrainError, Trainer, TrainerParams, TrainingLogger, TrainingPhase};

/// Trains one binary predictor per class.
///
/// Each class gets fresh weights and a fresh shuffle sequence from its own
/// seed (`params.seed + class_index`), so sequential and parallel execution
/// produce bit-identical models.
#[derive(Debug, Clone)]
pub struct OneVsRestTrainer {
    params: TrainerParams,
    parallel: bool,
}

impl OneVsRestTrainer {
    /// Create a sequential one-vs-rest trainer.
    pub fn new(params: TrainerParams) -> Self {
        Self {
            params,
            parallel: false,
        }
    }

    /// Run the per-class trainings on rayon workers.
    ///
    /// Results are still collected in class-index order.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Train `CLASS_COUNT` predictors against binarized targets.
    pub fn train<I, R>(
        &self,
        data: &[(I, R)],
        scaling: &ScalingFunction,
    ) -> Result<MultiClassModel, TrainError>
    where
        I: PredictionInput + Scalable + Clone + Sync,
        R: MultiClassResult + Sync,
    {
        assert!(
            R::CLASS_COUNT >= 2,
            "one-vs-rest needs at least 2 classes, got {}",
            R::CLASS_COUNT
        );

        // Scale and encode once; the per-class runs differ only in targets.
        let features: Vec<Vec<f64>> = data
            .iter()
            .map(|(input, _)| scaling.apply(input).encode())
            .collect();

        let train_class = |class_index: usize| -> Result<ClassOutput, TrainError> {
            let targets: Vec<f64> = data
                .iter()
                .map(|(_, result)| result.separate(class_index).encode())
                .collect();

            let params = TrainerParams {
                seed: self.params.seed.wrapping_add(class_index as u64),
                ..self.params.clone()
            };
            let output = Trainer::new(params).train_encoded(&features, &targets, scaling)?;
            Ok(ClassOutput {
                predictor: output.predictor,
                phases: output.phases,
            })
        };

        let outputs: Vec<ClassOutput> = if self.parallel {
            (0..R::CLASS_COUNT)
                .into_par_iter()
                .map(train_class)
                .collect::<Result<_, _>>()?
        } else {
            (0..R::CLASS_COUNT)
                .map(train_class)
                .collect::<Result<_, _>>()?
        };

        let logger = TrainingLogger::new(self.params.verbosity);
        let mut predictors = Vec::with_capacity(outputs.len());
        let mut phases = Vec::with_capacity(outputs.len());
        for (class_index, output) in outputs.into_iter().enumerate() {
            logger.debug(&format!(
                "class {class_index}: accuracy {:.4}, error {:.4}",
                output.predictor.accuracy(),
                output.predictor.error()
            ));
            predictors.push(output.predictor);
            phases.push(output.phases);
        }

        Ok(MultiClassModel { predictors, phases })
    }
}

struct ClassOutput {
    predictor: Predictor,
    phases: Vec<TrainingPhase>,
}

/// `K` trained predictors, indexed by class.
#[derive(Debug, Clone)]
pub struct MultiClassModel {
    predictors: Vec<Predictor>,
    phases: Vec<Vec<TrainingPhase>>,
}

impl MultiClassModel {
    /// Number of classes the model was trained for.
    pub fn class_count(&self) -> usize {
        self.predictors.len()
    }

    /// Predictor for one class.
    pub fn predictor(&self, class_index: usize) -> &Predictor {
        &self.predictors[class_index]
    }

    /// All predictors, in class-index order.
    pub fn predictors(&self) -> &[Predictor] {
        &self.predictors
    }

    /// Training snapshots per class, in class-index order.
    pub fn phases(&self, class_index: usize) -> &[TrainingPhase] {
        &self.phases[class_index]
    }

    /// One probability per class for the given input.
    pub fn probabilities<I: PredictionInput + Scalable + Clone>(&self, input: &I) -> Vec<f64> {
        self.predictors.iter().map(|p| p.predict(input)).collect()
    }

    /// Winning class index for the given input.
    pub fn predict_class<I: PredictionInput + Scalable + Clone>(&self, input: &I) -> usize {
        argmax_class(&self.probabilities(input))
    }

    /// Decode the winning class into a domain label.
    ///
    /// # Panics
    ///
    /// Panics if the decoder's class count differs from the number of
    /// trained predictors; mixing decoders and models of different arity is
    /// a programming error.
    pub fn decode<I, D>(&self, input: &I, decoder: &D) -> D::Output
    where
        I: PredictionInput + Scalable + Clone,
        D: MultiClassDecoder,
    {
        assert_eq!(
            self.class_count(),
            <D::Output as MultiClassResult>::CLASS_COUNT,
            "decoder expects {} classes but the model trained {}",
            <D::Output as MultiClassResult>::CLASS_COUNT,
            self.class_count()
        );
        decoder.decode(&self.probabilities(input))
    }
}

/// Index of the maximum probability; ties break to the lowest class index.
///
/// # Panics
///
/// Panics on an empty slice.
pub fn argmax_class(probabilities: &[f64]) -> usize {
    assert!(!probabilities.is_empty(), "no class probabilities to decode");

    let mut best = 0;
    for (index, &p) in probabilities.iter().enumerate().skip(1) {
        if p > probabilities[best] {
            best = index;
        }
    }
    best
}
