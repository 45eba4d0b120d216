mod cli;
mod converter;
mod error;
mod instructions;
mod logging;
mod tool;

use anyhow::{Context, Result};
use clap::Parser;
use converter::Outcome;
use error::ConvertError;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    let opts = converter::ConvertOptions::from_cli(&cli);
    let mut stdout = std::io::stdout().lock();
    let outcome = converter::run(&mut tool::SystemRunner, &opts, &mut stdout)
        .context("Failed to write report to stdout")?;

    match outcome {
        Outcome::Converted(path) => {
            tracing::debug!(output = %path.display(), "document written");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Fallback(ConvertError::ToolFailed { code, .. }) => {
            tracing::debug!(?code, "fell back to manual instructions after tool failure");
            Ok(ExitCode::FAILURE)
        }
        Outcome::Fallback(err) => {
            tracing::debug!(error = %err, "fell back to manual instructions");
            Ok(ExitCode::FAILURE)
        }
    }
}
