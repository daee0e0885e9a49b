//! # u-significance
//!
//! Significance statistics for comparing two experimental samples, e.g.
//! the scores of two methods on the same benchmark.
//!
//! The crate computes the statistic only; reading it against a critical
//! value table is up to the operator.
//!
//! ## Modules
//!
//! - [`aggregation`] — Cross-validation fold aggregation
//! - [`testing`] — Welch t-test and Wilcoxon signed-rank test
//! - [`selection`] — Choosing the test from a hint or the sample sizes
//! - [`compare`] — Aggregate, select and run in one call
//! - [`report`] — Operator-facing report lines and JSON form
//! - [`input`] — Parsing samples from JSON arguments or files
//! - [`cli`] — Command-line interface definition
//!
//! ## Design Philosophy
//!
//! - **Pure core**: every computation is a function over `&[f64]`
//! - **Fail fast**: invalid input is an error, never a silent default
//! - **Numerical stability**: Leverages `u-numflow` for mean and variance

pub mod aggregation;
pub mod cli;
pub mod compare;
pub mod error;
pub mod input;
pub mod report;
pub mod selection;
pub mod testing;

pub use error::{Result, SampleId, SignificanceError};
