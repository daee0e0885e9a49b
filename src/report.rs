//! Operator-facing report of a comparison.
//!
//! The report carries the raw statistic only. Its text form names the
//! reference table the operator has to consult.

use std::fmt;

use serde::Serialize;

use crate::selection::TestKind;
use crate::testing::{WelchResult, WilcoxonResult};

/// Outcome of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "test", content = "result", rename_all = "snake_case")]
pub enum Report {
    Welch(WelchResult),
    Wilcoxon(WilcoxonResult),
}

impl Report {
    /// Test that produced this report.
    pub fn kind(&self) -> TestKind {
        match self {
            Report::Welch(_) => TestKind::Welch,
            Report::Wilcoxon(_) => TestKind::Wilcoxon,
        }
    }

    /// Progress line announcing the test.
    pub fn banner(&self) -> &'static str {
        match self.kind() {
            TestKind::Welch => "Performing Welch test...",
            TestKind::Wilcoxon => "Performing Wilcoxon signed-rank test...",
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Welch(r) => {
                writeln!(f, "Check Student's t-distribution table for")?;
                writeln!(f, "t = {}", r.t)?;
                write!(f, "v = {}", r.df)
            }
            Report::Wilcoxon(WilcoxonResult::Exact { n, w }) => {
                writeln!(f, "Lookup critical values for Wilcoxon signed-rank test with")?;
                writeln!(f, "n = {n}")?;
                write!(f, "W = {w}")
            }
            Report::Wilcoxon(WilcoxonResult::Normal { z }) => {
                writeln!(f, "Check normal distribution table for")?;
                write!(f, "z = {z}")
            }
        }
    }
}
