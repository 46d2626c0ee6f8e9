//! `kwic build` command - build a keyword-in-context index
//!
//! Input is either a thesaurus (JSON array of concepts) or JSON Lines label
//! rows. Output follows `--format`: aligned lines, the serialized index, or
//! records.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use kwic_core::bail_usage;
use kwic_core::error::{KwicError, Result};
use kwic_core::kwic::{IndexGenerator, KwicEntry, KwicIndex};
use kwic_core::records;
use kwic_core::refid::HashRefIds;
use kwic_core::rows::read_rows;
use kwic_core::thesaurus::Thesaurus;
use tracing::debug;

use crate::cli::{BuildArgs, InputFormat, OutputFormat};
use crate::commands::dispatch::command::CommandContext;

/// Execute the build command
pub fn execute(ctx: &CommandContext, args: &BuildArgs) -> Result<()> {
    let language = ctx.language(args.lang.as_deref());
    let scheme = args.scheme.as_deref();
    let ref_ids = HashRefIds::new(ctx.config.id_prefix.clone());
    let generator = IndexGenerator::new(ctx.config, &ref_ids);

    let index = match args.input_format {
        InputFormat::Concepts => {
            let thesaurus = load_thesaurus(&args.input)?;
            let rows = thesaurus.labels(language, scheme).into_iter().map(Ok);
            generator.generate_in_scheme(rows, language, scheme)?
        }
        InputFormat::Rows => {
            if scheme.is_some() {
                bail_usage!(
                    "--scheme needs concept input; label rows carry no scheme membership"
                );
            }
            let rows = read_rows(open_input(&args.input)?);
            generator.generate_in_scheme(rows, language, scheme)?
        }
    };

    debug!(elapsed = ?ctx.start.elapsed(), entries = index.len(), "build");

    match ctx.cli.format {
        OutputFormat::Human => output_human(&index, ctx.cli.quiet),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&index)?);
        }
        OutputFormat::Records => print!("{}", records::render(&index)),
    }

    Ok(())
}

fn load_thesaurus(input: &Path) -> Result<Thesaurus> {
    if is_stdin(input) {
        Thesaurus::from_reader(io::stdin().lock())
    } else {
        Thesaurus::load(input)
    }
}

fn open_input(input: &Path) -> Result<Box<dyn BufRead>> {
    if is_stdin(input) {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(input).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            KwicError::not_found("rows file", input.display())
        } else {
            KwicError::Io(e)
        }
    })?;
    Ok(Box::new(BufReader::new(file)))
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn output_human(index: &KwicIndex, quiet: bool) {
    if index.is_empty() {
        if !quiet {
            println!("No entries");
        }
        return;
    }

    for line in human_lines(index) {
        println!("{}", line);
    }
}

/// Before-contexts right-aligned so that every key starts in the same column
fn human_lines(index: &KwicIndex) -> Vec<String> {
    let width = index
        .iter()
        .map(|e| e.before.as_deref().unwrap_or_default().chars().count())
        .max()
        .unwrap_or(0);

    index.iter().map(|e| human_line(e, width)).collect()
}

fn human_line(entry: &KwicEntry, width: usize) -> String {
    let mut line = format!(
        "{:>width$}{}{}",
        entry.before.as_deref().unwrap_or_default(),
        entry.key.as_deref().unwrap_or_default(),
        entry.after.as_deref().unwrap_or_default(),
    );
    if let Some(xref) = &entry.cross_ref {
        line.push_str(&format!("  {} {}", xref.caption, xref.text));
    }
    line
}
