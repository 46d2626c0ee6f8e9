//! `kwic tokenize` command - show the index tokens of a label

use kwic_core::error::Result;
use kwic_core::records::escape_value;
use kwic_core::text::{Token, Tokenizer};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;

#[derive(Debug, Serialize)]
struct TokenView<'a> {
    text: &'a str,
    offset: usize,
    /// Long enough to produce an index entry
    indexed: bool,
}

/// Execute the tokenize command
pub fn execute(ctx: &CommandContext, text: &str, language: &str) -> Result<()> {
    let tokenizer = Tokenizer::for_language(language, ctx.config);
    let tokens = tokenizer.tokenize(text);
    let views = token_views(&tokens, ctx.config.context.min_token_chars);

    match ctx.cli.format {
        OutputFormat::Human => {
            if views.is_empty() && !ctx.cli.quiet {
                println!("No tokens");
            }
            for view in &views {
                let marker = if view.indexed { "" } else { "  (skipped)" };
                println!("{:>4}  {}{}", view.offset, view.text, marker);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Records => {
            println!(
                "H tokens={} lang={}",
                views.len(),
                tokenizer.profile().tag
            );
            for view in &views {
                println!(
                    "T offset={} indexed={} text=\"{}\"",
                    view.offset,
                    view.indexed,
                    escape_value(view.text)
                );
            }
        }
    }

    Ok(())
}

fn token_views(tokens: &[Token], min_token_chars: usize) -> Vec<TokenView<'_>> {
    tokens
        .iter()
        .map(|t| TokenView {
            text: &t.text,
            offset: t.offset,
            indexed: t.char_len() >= min_token_chars,
        })
        .collect()
}
