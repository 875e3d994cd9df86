use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use honolate::cli::{Arguments, ExitStatus};
use tracing_subscriber::{EnvFilter, prelude::*};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = setup_tracing(args.verbose()) {
        eprintln!("Error: {:#}", err);
        return ExitStatus::Error.into();
    }

    match honolate::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Diagnostics go to stderr so they never mix with the report. `RUST_LOG`
/// takes precedence over `-v`.
fn setup_tracing(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("honolate=debug")
        } else {
            EnvFilter::new("honolate=warn")
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()?;

    Ok(())
}
