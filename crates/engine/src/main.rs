//! Laundry Engine - command-line entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use laundry_engine::cli::{run, Cli};
use laundry_engine::config::{load_dotenv, repo_root, EngineConfig};
use laundry_engine::telemetry;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let dotenv_files = load_dotenv(&repo_root());
    let config = EngineConfig::from_env()
        .and_then(|config| config.with_overrides(cli.catalogue.clone(), cli.locale.clone()))
        .context("loading configuration")?;

    telemetry::init(&config.log_filter);
    for path in &dotenv_files {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let output = run(&cli.command, &config)?;
    println!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
