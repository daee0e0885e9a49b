//! Test selection.
//!
//! Picks the test to run from an explicit method hint or, without one,
//! from the sample sizes: small paired samples get the non-parametric
//! Wilcoxon test, everything else Welch's t-test.

use std::fmt;
use std::str::FromStr;

use crate::error::SignificanceError;

/// Sample size below which unhinted, equal-length samples are compared
/// with the Wilcoxon signed-rank test.
pub const SMALL_SAMPLE_LIMIT: usize = 30;

/// Explicitly requested test method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Wilcoxon,
    Welch,
}

impl FromStr for Method {
    type Err = SignificanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("wilcoxon") {
            Ok(Method::Wilcoxon)
        } else if s.eq_ignore_ascii_case("welch") {
            Ok(Method::Welch)
        } else {
            Err(SignificanceError::UnknownMethod(s.to_string()))
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Wilcoxon => f.write_str("Wilcoxon"),
            Method::Welch => f.write_str("Welch"),
        }
    }
}

/// Test that will actually be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    /// Wilcoxon signed-rank test (paired).
    Wilcoxon,
    /// Welch's unequal-variance t-test (independent).
    Welch,
}

/// Decides which test to run.
///
/// Only the hint and the sample lengths are inspected, never the values.
///
/// # Examples
///
/// ```
/// use u_significance::selection::{select_test, Method, TestKind};
///
/// let a = [0.0; 20];
/// let b = [0.0; 20];
/// assert_eq!(select_test(None, &a, &b), TestKind::Wilcoxon);
/// assert_eq!(select_test(Some(Method::Welch), &a, &b), TestKind::Welch);
/// ```
pub fn select_test(hint: Option<Method>, a: &[f64], b: &[f64]) -> TestKind {
    match hint {
        Some(Method::Wilcoxon) => TestKind::Wilcoxon,
        Some(Method::Welch) => TestKind::Welch,
        None if a.len() < SMALL_SAMPLE_LIMIT && a.len() == b.len() => TestKind::Wilcoxon,
        None => TestKind::Welch,
    }
}
