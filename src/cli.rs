//! CLI argument parsing for kwic
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub use kwic_core::format::OutputFormat;

/// kwic - keyword-in-context indexes for thesauri
#[derive(Parser, Debug)]
#[command(name = "kwic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `debug`, `kwic_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ~/.config/kwic/config.toml)
    #[arg(long, global = true, env = "KWIC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a keyword-in-context index
    Build(BuildArgs),

    /// Show the index tokens of a label
    Tokenize {
        /// Label text
        text: String,

        /// Language of the label
        #[arg(long, short)]
        lang: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input file (`-` reads from stdin)
    pub input: PathBuf,

    /// Language to index (default: config `default_language`)
    #[arg(long, short)]
    pub lang: Option<String>,

    /// Restrict to concepts of this concept scheme URI
    #[arg(long, short)]
    pub scheme: Option<String>,

    /// Shape of the input file
    #[arg(long, value_enum, default_value = "concepts")]
    pub input_format: InputFormat,
}

/// Input file shapes accepted by `build`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON array of concepts with their labels
    Concepts,
    /// JSON Lines of label rows
    Rows,
}
