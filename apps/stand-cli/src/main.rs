//! `stand` binary entry point.
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize logging (stderr)
//! 3. Load configuration
//! 4. Run the command, print its output on stdout

use anyhow::Context;
use clap::Parser;

use stand_cli::cli::Cli;
use stand_cli::config::StandConfig;
use stand_cli::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = StandConfig::load(cli.config.as_deref())
        .context("Failed to load stand configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let output = stand_cli::run(&cli, &config)?;
    print!("{}", output);

    Ok(())
}
