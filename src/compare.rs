//! End-to-end comparison of two samples.
//!
//! Optional cross-validation aggregation, test selection, then the
//! selected test. Any error aborts the comparison.
//!
//! # Examples
//!
//! ```
//! use u_significance::compare::{compare, Options};
//! use u_significance::report::Report;
//!
//! let a = [0.81, 0.79, 0.84, 0.86];
//! let b = [0.78, 0.80, 0.79, 0.82];
//! let opts = Options { folds: Some(2), method: None };
//! let report = compare(&a, &b, &opts).unwrap();
//! assert!(matches!(report, Report::Wilcoxon(_)));
//! ```

use std::borrow::Cow;

use tracing::debug;

use crate::aggregation::aggregate_folds;
use crate::error::{ensure_finite, Result, SampleId};
use crate::report::Report;
use crate::selection::{select_test, Method, TestKind};
use crate::testing::{welch_t_test, wilcoxon_signed_rank_test};

/// Comparison options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Folds per repetition; when set, both samples are reduced to
    /// per-repetition means first.
    pub folds: Option<usize>,
    /// Explicit test choice; `None` selects by sample size.
    pub method: Option<Method>,
}

/// Compares sample `a` against sample `b`.
///
/// # Errors
///
/// Propagates aggregation errors and the errors of the selected test.
pub fn compare(a: &[f64], b: &[f64], options: &Options) -> Result<Report> {
    let (a, b): (Cow<'_, [f64]>, Cow<'_, [f64]>) = match options.folds {
        Some(folds) => {
            ensure_finite(a, SampleId::A)?;
            ensure_finite(b, SampleId::B)?;
            let a = aggregate_folds(a, folds)?;
            let b = aggregate_folds(b, folds)?;
            debug!(folds, len_a = a.len(), len_b = b.len(), "aggregated cross-validation folds");
            (Cow::Owned(a), Cow::Owned(b))
        }
        None => (Cow::Borrowed(a), Cow::Borrowed(b)),
    };

    let kind = select_test(options.method, &a, &b);
    debug!(?kind, hint = ?options.method, len_a = a.len(), len_b = b.len(), "selected test");

    let report = match kind {
        TestKind::Wilcoxon => Report::Wilcoxon(wilcoxon_signed_rank_test(&a, &b)?),
        TestKind::Welch => Report::Welch(welch_t_test(&a, &b)?),
    };
    debug!(?report, "comparison finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignificanceError;
    use crate::testing::WilcoxonResult;

    #[test]
    fn default_options_small_paired() {
        let a = [2.0, 3.0, 1.0, 7.0];
        let b = [1.0, 2.0, 3.0, 4.0];
        let r = compare(&a, &b, &Options::default()).expect("should compare");
        assert_eq!(r, Report::Wilcoxon(WilcoxonResult::Exact { n: 4, w: 3.0 }));
    }

    #[test]
    fn aggregation_feeds_selected_test() {
        // Aggregated: a = [3, 7], b = [1.5, 3.5] → Welch on the means
        let a = [2.0, 4.0, 6.0, 8.0];
        let b = [1.0, 2.0, 3.0, 4.0];
        let opts = Options {
            folds: Some(2),
            method: Some(Method::Welch),
        };
        let r = compare(&a, &b, &opts).expect("should compare");
        let direct = welch_t_test(&[3.0, 7.0], &[1.5, 3.5]).expect("should compute");
        assert_eq!(r, Report::Welch(direct));
    }

    #[test]
    fn unequal_lengths_fall_back_to_welch() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.5, 7.0];
        let r = compare(&a, &b, &Options::default()).expect("should compare");
        assert!(matches!(r, Report::Welch(_)));
    }

    #[test]
    fn forced_wilcoxon_on_unequal_lengths_fails() {
        let opts = Options {
            folds: None,
            method: Some(Method::Wilcoxon),
        };
        assert!(matches!(
            compare(&[1.0, 2.0, 3.0], &[1.0, 2.0], &opts),
            Err(SignificanceError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn aggregation_error_aborts() {
        let opts = Options {
            folds: Some(2),
            method: None,
        };
        assert!(matches!(
            compare(&[1.0, 2.0, 3.0], &[1.0, 2.0], &opts),
            Err(SignificanceError::InvalidAggregation { len: 3, folds: 2 })
        ));
    }

    #[test]
    fn non_finite_before_aggregation_names_sample() {
        let opts = Options {
            folds: Some(2),
            method: None,
        };
        assert!(matches!(
            compare(&[1.0, 2.0], &[3.0, f64::NAN], &opts),
            Err(SignificanceError::NonFiniteValue {
                sample: SampleId::B,
                index: 1
            })
        ));
    }

    #[test]
    fn large_samples_use_welch() {
        let a: Vec<f64> = (0..40).map(f64::from).collect();
        let b: Vec<f64> = (0..40).map(|i| f64::from(i) * 0.5).collect();
        let r = compare(&a, &b, &Options::default()).expect("should compare");
        assert!(matches!(r, Report::Welch(w) if w.t > 0.0));
    }
}
