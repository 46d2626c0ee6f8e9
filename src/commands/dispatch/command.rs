//! Command trait and context for dispatching commands

use std::time::Instant;

use kwic_core::config::IndexConfig;
use kwic_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{build, tokenize};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a IndexConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a IndexConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--lang` when given, otherwise the configured default language
    pub fn language<'b>(&'b self, lang: Option<&'b str>) -> &'b str {
        lang.unwrap_or(&self.config.default_language)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Build(args) => build::execute(ctx, args),
            Commands::Tokenize { text, lang } => {
                tokenize::execute(ctx, text, ctx.language(lang.as_deref()))
            }
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("kwic {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Keyword-in-context indexes for thesaurus labels.");
        println!();
        println!("Run `kwic --help` for usage information.");
        Ok(())
    }
}
