//! CLI argument parsing for u-significance

use clap::{Parser, ValueEnum};

use crate::compare::Options;
use crate::selection::Method;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "u-significance")]
#[command(version)]
#[command(about = "Compare two samples with Welch's t-test or the Wilcoxon signed-rank test", long_about = None)]
pub struct Cli {
    /// The two samples to compare, each a JSON array of numbers or a JSON file
    #[arg(value_name = "SAMPLE", num_args = 2, required = true)]
    pub samples: Vec<String>,

    /// Number of cross-validation folds per repetition; folds are averaged first
    #[arg(long = "cross-validation", value_name = "N")]
    pub cross_validation: Option<usize>,

    /// Force a test (Wilcoxon or Welch) instead of choosing by sample size
    #[arg(short, long)]
    pub method: Option<Method>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Comparison options selected on the command line.
    pub fn options(&self) -> Options {
        Options {
            folds: self.cross_validation,
            method: self.method,
        }
    }
}
