//! Command dispatch logic for kwic

use std::time::Instant;

use kwic_core::config::IndexConfig;
use kwic_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

pub mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// `--config` wins over the global configuration file
fn load_config(cli: &Cli) -> Result<IndexConfig> {
    match &cli.config {
        Some(path) => IndexConfig::load(path),
        None => IndexConfig::load_global(),
    }
}
