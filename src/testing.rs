//! Hypothesis testing.
//!
//! Welch's unequal-variance t-test for two independent samples and the
//! Wilcoxon signed-rank test for paired samples. Both return the raw
//! statistic; judging significance against a reference table is left to
//! the caller.
//!
//! # Examples
//!
//! ```
//! use u_significance::testing::welch_t_test;
//!
//! // Accuracy per repetition of two classifiers
//! let boosted = [0.91, 0.89, 0.92, 0.90, 0.93];
//! let baseline = [0.85, 0.86, 0.84, 0.87, 0.85];
//! let r = welch_t_test(&boosted, &baseline).unwrap();
//! assert!(r.t > 0.0);
//! assert!(r.df <= 8.0);
//! ```

use serde::Serialize;
use u_numflow::stats;

use crate::error::{ensure_finite, Result, SampleId, SignificanceError};

/// Smallest number of non-zero differences for which the Wilcoxon test
/// switches from the tabulated statistic to the normal approximation.
pub const NORMAL_APPROXIMATION_MIN: usize = 10;

// ---------------------------------------------------------------------------
// Welch t-test
// ---------------------------------------------------------------------------

/// Result of Welch's t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WelchResult {
    /// t statistic.
    pub t: f64,
    /// Welch–Satterthwaite degrees of freedom (generally fractional).
    pub df: f64,
}

/// Two-sample Welch t-test: H₀: μ₁ = μ₂ (unequal variances).
///
/// # Algorithm
///
/// t = (x̄₁ - x̄₂) / √(s₁²/n₁ + s₂²/n₂), with Bessel-corrected sample
/// variances s², and
///
/// df = (s₁²/n₁ + s₂²/n₂)² / ((s₁²/n₁)²/(n₁-1) + (s₂²/n₂)²/(n₂-1)).
///
/// The samples need not have equal length.
///
/// # Errors
///
/// - [`SignificanceError::InsufficientSample`] if either sample has fewer
///   than 2 observations.
/// - [`SignificanceError::NonFiniteValue`] on NaN or infinite input.
/// - [`SignificanceError::DegenerateVariance`] if the standard error is
///   exactly zero, i.e. both samples are constant.
///
/// # References
///
/// Welch (1947). "The generalization of Student's problem when several
/// different population variances are involved". Biometrika, 34, 28–35.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchResult> {
    let n1 = a.len();
    let n2 = b.len();
    if n1 < 2 || n2 < 2 {
        return Err(SignificanceError::InsufficientSample { len: n1.min(n2) });
    }
    ensure_finite(a, SampleId::A)?;
    ensure_finite(b, SampleId::B)?;

    let mean1 = stats::mean(a).ok_or(SignificanceError::InsufficientSample { len: n1 })?;
    let mean2 = stats::mean(b).ok_or(SignificanceError::InsufficientSample { len: n2 })?;
    let var1 = stats::variance(a).ok_or(SignificanceError::InsufficientSample { len: n1 })?;
    let var2 = stats::variance(b).ok_or(SignificanceError::InsufficientSample { len: n2 })?;

    let n1f = n1 as f64;
    let n2f = n2 as f64;

    let v1 = var1 / n1f;
    let v2 = var2 / n2f;
    let se_sq = v1 + v2;
    if se_sq == 0.0 {
        return Err(SignificanceError::DegenerateVariance);
    }

    let t = (mean1 - mean2) / se_sq.sqrt();

    // Welch-Satterthwaite degrees of freedom, in terms of the shares
    // w = v / (v1 + v2) so that tiny variances do not underflow
    let w1 = v1 / se_sq;
    let w2 = v2 / se_sq;
    let df = 1.0 / (w1 * w1 / (n1f - 1.0) + w2 * w2 / (n2f - 1.0));

    Ok(WelchResult { t, df })
}

// ---------------------------------------------------------------------------
// Wilcoxon signed-rank test
// ---------------------------------------------------------------------------

/// A non-zero paired difference together with its (possibly fractional)
/// rank by absolute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedDifference {
    /// Signed difference aᵢ - bᵢ.
    pub value: f64,
    /// 1-based rank of |value|; tied entries share the mean of their ranks.
    pub rank: f64,
}

/// Result of the Wilcoxon signed-rank test.
///
/// Which variant is produced depends on the number of non-zero
/// differences `n`: below [`NORMAL_APPROXIMATION_MIN`] the statistic must
/// be compared against an exact critical-value table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "approximation", rename_all = "snake_case")]
pub enum WilcoxonResult {
    /// `n` non-zero differences and W = min(R⁺, R⁻), for table lookup.
    Exact { n: usize, w: f64 },
    /// Normal-approximation z score.
    Normal { z: f64 },
}

/// Ranks non-zero differences by absolute value with tie averaging.
///
/// Zero differences are dropped. The result is ordered by ascending
/// |value|; every maximal run of equal absolute values receives the mean
/// of the 1-based positions it occupies. Ties are exact equality.
///
/// # Examples
///
/// ```
/// use u_significance::testing::signed_ranks;
///
/// let ranks: Vec<f64> = signed_ranks(&[3.0, -1.0, 0.0, 1.0, 2.0])
///     .iter()
///     .map(|r| r.rank)
///     .collect();
/// assert_eq!(ranks, vec![1.5, 1.5, 3.0, 4.0]);
/// ```
pub fn signed_ranks(differences: &[f64]) -> Vec<RankedDifference> {
    let mut sorted: Vec<f64> = differences.iter().copied().filter(|&d| d != 0.0).collect();
    sorted.sort_by(|x, y| x.abs().total_cmp(&y.abs()));

    let n = sorted.len();
    let mut ranked = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        let magnitude = sorted[i].abs();
        let mut j = i + 1;
        while j < n && sorted[j].abs() == magnitude {
            j += 1;
        }
        // Positions i..j are tied; average rank = (i+1 + j) / 2
        let rank = (i + 1 + j) as f64 / 2.0;
        ranked.extend(sorted[i..j].iter().map(|&value| RankedDifference { value, rank }));
        i = j;
    }
    ranked
}

/// Wilcoxon signed-rank test for paired samples.
///
/// # Algorithm
///
/// 1. dᵢ = xᵢ - yᵢ, discarding dᵢ = 0
/// 2. Rank |dᵢ| with tie averaging ([`signed_ranks`])
/// 3. R⁺ / R⁻ = sum of ranks with dᵢ > 0 / dᵢ < 0, N = count of dᵢ ≠ 0
/// 4. N < 10: report N and W = min(R⁺, R⁻)
/// 5. N ≥ 10: z = (R⁺ - R⁻) / √(N(N+1)(2N+1)/6)
///
/// When every difference is zero the result is `Exact { n: 0, w: 0.0 }`.
///
/// # Errors
///
/// - [`SignificanceError::LengthMismatch`] if the slices differ in length.
/// - [`SignificanceError::NonFiniteValue`] on NaN or infinite input.
///
/// # References
///
/// - Wilcoxon (1945). "Individual comparisons by ranking methods".
///   Biometrics Bulletin, 1(6), 80–83.
///
/// # Examples
///
/// ```
/// use u_significance::testing::{wilcoxon_signed_rank_test, WilcoxonResult};
///
/// // Misclassified instances per dataset, same datasets for both methods
/// let pruned = [12.0, 30.0, 25.0, 8.0, 41.0];
/// let full = [10.0, 27.0, 25.0, 4.0, 46.0];
/// // d = [2, 3, 0, 4, -5]: one zero dropped, R⁺ = 6, R⁻ = 4
/// let r = wilcoxon_signed_rank_test(&pruned, &full).unwrap();
/// assert_eq!(r, WilcoxonResult::Exact { n: 4, w: 4.0 });
/// ```
pub fn wilcoxon_signed_rank_test(x: &[f64], y: &[f64]) -> Result<WilcoxonResult> {
    if x.len() != y.len() {
        return Err(SignificanceError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    ensure_finite(x, SampleId::A)?;
    ensure_finite(y, SampleId::B)?;

    let diffs: Vec<f64> = x.iter().zip(y.iter()).map(|(&a, &b)| a - b).collect();
    let ranked = signed_ranks(&diffs);

    let (positive, negative) = ranked.iter().fold((0.0, 0.0), |(pos, neg), r| {
        if r.value > 0.0 {
            (pos + r.rank, neg)
        } else {
            (pos, neg + r.rank)
        }
    });

    let n = ranked.len();
    if n < NORMAL_APPROXIMATION_MIN {
        return Ok(WilcoxonResult::Exact {
            n,
            w: f64::min(positive, negative),
        });
    }

    let nf = n as f64;
    let sigma = (nf * (nf + 1.0) * (2.0 * nf + 1.0) / 6.0).sqrt();
    Ok(WilcoxonResult::Normal {
        z: (positive - negative) / sigma,
    })
}
