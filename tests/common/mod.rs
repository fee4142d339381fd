//! Shared record types for integration tests.
//!
//! These mirror the tabular shapes the engine is built for: five-field
//! person records (contractor flag, age, job, income, satisfaction) encoded
//! with fixed continuous slots and 3-wide one-hot groups. Parsing the raw
//! text format stays outside the crate; tests construct records directly.

#![allow(dead_code)]

use logit::encoding::{
    mark_one_hot, BinaryDecoder, BinaryResult, ClassIndicator, MultiClassDecoder,
    MultiClassResult, PredictionInput,
};
use logit::multiclass::argmax_class;
use logit::scaling::Scalable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    Mgmt,
    Sale,
    Tech,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfaction {
    Low,
    Medium,
    High,
}

impl JobType {
    pub fn index(self) -> usize {
        match self {
            JobType::Mgmt => 0,
            JobType::Sale => 1,
            JobType::Tech => 2,
        }
    }
}

impl Satisfaction {
    pub fn index(self) -> usize {
        match self {
            Satisfaction::Low => 0,
            Satisfaction::Medium => 1,
            Satisfaction::High => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Satisfaction::Low,
            1 => Satisfaction::Medium,
            2 => Satisfaction::High,
            _ => panic!("satisfaction has 3 classes, got index {index}"),
        }
    }
}

// =============================================================================
// Employment prediction (binary target)
// =============================================================================

/// Input for predicting contractor status from the remaining fields.
///
/// Encoding layout: `[age, job(3 one-hot), income, satisfaction(3 one-hot)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentInput {
    pub age: f64,
    pub job: JobType,
    pub income: f64,
    pub satisfaction: Satisfaction,
}

impl PredictionInput for EmploymentInput {
    fn encode(&self) -> Vec<f64> {
        let mut result = vec![0.0; 8];
        result[0] = self.age;
        mark_one_hot(&mut result, 1, self.job.index(), 3);
        result[4] = self.income;
        mark_one_hot(&mut result, 5, self.satisfaction.index(), 3);
        result
    }
}

impl Scalable for EmploymentInput {
    fn continuous(&self) -> Vec<f64> {
        vec![self.age, self.income]
    }

    fn rescale(&self, divisors: &[f64]) -> Self {
        Self {
            age: self.age / divisors[0],
            income: self.income / divisors[1],
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmploymentResult {
    pub is_contractor: bool,
}

impl BinaryResult for EmploymentResult {
    fn encode(&self) -> f64 {
        if self.is_contractor {
            1.0
        } else {
            0.0
        }
    }
}

/// Standard 0.5-threshold decoder for the contractor flag.
pub struct EmploymentDecoder;

impl BinaryDecoder for EmploymentDecoder {
    type Output = EmploymentResult;

    fn decode(&self, probability: f64) -> EmploymentResult {
        EmploymentResult {
            is_contractor: probability >= 0.5,
        }
    }
}

/// Tri-level decoder for an ordinal target expressed as one probability.
pub struct SatisfactionLevelDecoder;

impl BinaryDecoder for SatisfactionLevelDecoder {
    type Output = Satisfaction;

    fn decode(&self, probability: f64) -> Satisfaction {
        if probability < 0.33 {
            Satisfaction::Low
        } else if probability > 0.66 {
            Satisfaction::High
        } else {
            Satisfaction::Medium
        }
    }
}

// =============================================================================
// Satisfaction prediction (3-class target)
// =============================================================================

/// Input for predicting satisfaction from the remaining fields.
///
/// Encoding layout: `[contractor, age, job(3 one-hot), income]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SatisfactionInput {
    pub is_contractor: bool,
    pub age: f64,
    pub job: JobType,
    pub income: f64,
}

impl PredictionInput for SatisfactionInput {
    fn encode(&self) -> Vec<f64> {
        let mut result = vec![0.0; 6];
        result[0] = if self.is_contractor { 1.0 } else { 0.0 };
        result[1] = self.age;
        mark_one_hot(&mut result, 2, self.job.index(), 3);
        result[5] = self.income;
        result
    }
}

impl Scalable for SatisfactionInput {
    fn continuous(&self) -> Vec<f64> {
        vec![self.age, self.income]
    }

    fn rescale(&self, divisors: &[f64]) -> Self {
        Self {
            age: self.age / divisors[0],
            income: self.income / divisors[1],
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatisfactionResult(pub Satisfaction);

impl MultiClassResult for SatisfactionResult {
    const CLASS_COUNT: usize = 3;

    fn separate(&self, class_index: usize) -> ClassIndicator {
        assert!(class_index < Self::CLASS_COUNT, "only classes 0 to 2 exist");
        ClassIndicator(self.0.index() == class_index)
    }
}

pub struct SatisfactionDecoder;

impl MultiClassDecoder for SatisfactionDecoder {
    type Output = SatisfactionResult;

    fn decode(&self, probabilities: &[f64]) -> SatisfactionResult {
        SatisfactionResult(Satisfaction::from_index(argmax_class(probabilities)))
    }
}

// =============================================================================
// Fixture datasets
// =============================================================================

/// Rows as the excluded parser would hand them over: contractor flag, age,
/// job, income, satisfaction.
pub fn person_rows() -> Vec<(bool, f64, JobType, f64, Satisfaction)> {
    use JobType::*;
    use Satisfaction::*;
    vec![
        (false, 66.0, Mgmt, 52_100.0, Low),
        (true, 35.0, Tech, 86_100.0, Medium),
        (false, 24.0, Tech, 44_000.0, High),
        (true, 43.0, Sale, 51_700.0, Medium),
        (false, 58.0, Mgmt, 38_000.0, Low),
        (true, 31.0, Tech, 91_200.0, High),
        (false, 49.0, Sale, 33_800.0, Low),
        (true, 27.0, Tech, 77_600.0, Medium),
        (false, 52.0, Mgmt, 45_300.0, Medium),
        (true, 38.0, Sale, 68_900.0, High),
        (false, 61.0, Mgmt, 41_500.0, Low),
        (true, 29.0, Tech, 82_400.0, High),
    ]
}

/// The rows shaped for contractor prediction.
pub fn employment_data() -> Vec<(EmploymentInput, EmploymentResult)> {
    person_rows()
        .into_iter()
        .map(|(is_contractor, age, job, income, satisfaction)| {
            (
                EmploymentInput {
                    age,
                    job,
                    income,
                    satisfaction,
                },
                EmploymentResult { is_contractor },
            )
        })
        .collect()
}

/// The same rows shaped for satisfaction prediction.
pub fn satisfaction_data() -> Vec<(SatisfactionInput, SatisfactionResult)> {
    person_rows()
        .into_iter()
        .map(|(is_contractor, age, job, income, satisfaction)| {
            (
                SatisfactionInput {
                    is_contractor,
                    age,
                    job,
                    income,
                },
                SatisfactionResult(satisfaction),
            )
        })
        .collect()
}
