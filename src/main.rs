use anyhow::{Context, Result};
use clap::Parser;
use u_significance::cli::{Cli, OutputFormat};
use u_significance::{compare, input};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(cli: &Cli) -> Result<()> {
    let a = input::parse_sample(&cli.samples[0]).context("reading first sample")?;
    let b = input::parse_sample(&cli.samples[1]).context("reading second sample")?;

    let report = compare::compare(&a, &b, &cli.options()).context("comparison failed")?;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", report.banner());
            println!("{report}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
