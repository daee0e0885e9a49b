//! Error types for significance computations.

use std::fmt;

use thiserror::Error;

/// Which of the two compared samples a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleId {
    A,
    B,
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleId::A => f.write_str("A"),
            SampleId::B => f.write_str("B"),
        }
    }
}

/// Errors raised by aggregation, test selection, the tests themselves, and
/// the sample input boundary.
#[derive(Error, Debug)]
pub enum SignificanceError {
    #[error("Dataset length {len} has to be a multiple of cross-validation n = {folds}")]
    InvalidAggregation { len: usize, folds: usize },

    #[error("Equal dataset length required (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("At least 2 observations per sample required (got {len})")]
    InsufficientSample { len: usize },

    #[error("Both samples have zero variance; the t statistic is undefined")]
    DegenerateVariance,

    #[error("Sample {sample} contains a non-finite value at index {index}")]
    NonFiniteValue { sample: SampleId, index: usize },

    #[error("Non-finite value in cross-validation block {block}")]
    NonFiniteBlock { block: usize },

    #[error("Unknown test method '{0}' (expected Wilcoxon or Welch)")]
    UnknownMethod(String),

    #[error("Invalid sample input {source_desc}: {reason}")]
    InvalidInput { source_desc: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for significance operations.
pub type Result<T> = std::result::Result<T, SignificanceError>;

/// Rejects NaN and infinities, reporting the sample and first offending index.
pub(crate) fn ensure_finite(data: &[f64], sample: SampleId) -> Result<()> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SignificanceError::NonFiniteValue { sample, index }),
        None => Ok(()),
    }
}
