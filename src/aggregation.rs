//! Cross-validation aggregation.
//!
//! A k-fold cross-validated experiment repeated r times produces `r * k`
//! raw measurements. Before comparing two methods, the folds of each
//! repetition are collapsed into one mean, so that the tests see one value
//! per independent repetition.
//!
//! # Examples
//!
//! ```
//! use u_significance::aggregation::aggregate_folds;
//!
//! // Two repetitions of 2-fold cross-validation
//! let raw = [2.0, 4.0, 6.0, 8.0];
//! assert_eq!(aggregate_folds(&raw, 2).unwrap(), vec![3.0, 7.0]);
//! ```

use u_numflow::stats;

use crate::error::{Result, SignificanceError};

/// Reduces consecutive blocks of `folds` values to their arithmetic mean.
///
/// Block `k` covers indices `k * folds .. (k + 1) * folds`; the output has
/// one value per block, in block order.
///
/// # Errors
///
/// - [`SignificanceError::InvalidAggregation`] if `folds` is zero or does
///   not evenly divide `sample.len()`.
/// - [`SignificanceError::NonFiniteBlock`] if a block holds NaN or infinity.
pub fn aggregate_folds(sample: &[f64], folds: usize) -> Result<Vec<f64>> {
    if folds == 0 || sample.len() % folds != 0 {
        return Err(SignificanceError::InvalidAggregation {
            len: sample.len(),
            folds,
        });
    }

    sample
        .chunks_exact(folds)
        .enumerate()
        .map(|(block, values)| {
            stats::mean(values).ok_or(SignificanceError::NonFiniteBlock { block })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_of_folds() {
        let r = aggregate_folds(&[2.0, 4.0, 6.0, 8.0], 2).expect("should aggregate");
        assert_eq!(r, vec![3.0, 7.0]);
    }

    #[test]
    fn ten_fold_two_repetitions() {
        let mut raw: Vec<f64> = (1..=10).map(f64::from).collect();
        raw.extend(std::iter::repeat(0.5).take(10));
        let r = aggregate_folds(&raw, 10).expect("should aggregate");
        assert_eq!(r.len(), 2);
        assert!((r[0] - 5.5).abs() < 1e-12, "r[0] = {}", r[0]);
        assert!((r[1] - 0.5).abs() < 1e-12, "r[1] = {}", r[1]);
    }

    #[test]
    fn whole_sample_is_one_block() {
        let r = aggregate_folds(&[1.0, 2.0, 3.0], 3).expect("should aggregate");
        assert_eq!(r, vec![2.0]);
    }

    #[test]
    fn empty_sample() {
        let r = aggregate_folds(&[], 5).expect("should aggregate");
        assert!(r.is_empty());
    }

    #[test]
    fn non_multiple_length_rejected() {
        let err = aggregate_folds(&[1.0, 2.0, 3.0], 2).unwrap_err();
        assert!(matches!(
            err,
            SignificanceError::InvalidAggregation { len: 3, folds: 2 }
        ));
    }

    #[test]
    fn non_finite_block_reported() {
        let err = aggregate_folds(&[1.0, 2.0, 3.0, f64::NAN], 2).unwrap_err();
        assert!(matches!(err, SignificanceError::NonFiniteBlock { block: 1 }));
    }

    #[test]
    fn zero_folds_rejected() {
        assert!(matches!(
            aggregate_folds(&[1.0, 2.0], 0),
            Err(SignificanceError::InvalidAggregation { folds: 0, .. })
        ));
    }
}
