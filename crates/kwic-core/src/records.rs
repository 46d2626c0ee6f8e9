//! Records output: one header line, then one `E` line per index entry

use crate::kwic::{KwicEntry, KwicIndex};

/// Records format version announced in the header
pub const RECORDS_VERSION: u32 = 1;

/// Escape a value for a quoted records field.
///
/// Backslashes, double quotes and line breaks are backslash-escaped so that
/// every entry stays on one line and reads back unambiguously.
pub fn escape_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str(r#"\""#),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            _ => out.push(c),
        }
    }
    out
}

/// `H kwic=1 lang=en entries=3 [scheme=...]`
pub fn header(index: &KwicIndex) -> String {
    let mut line = format!(
        "H kwic={} lang={} entries={}",
        RECORDS_VERSION,
        index.language,
        index.len()
    );
    if let Some(scheme) = &index.scheme {
        line.push_str(&format!(" scheme={}", scheme));
    }
    line
}

/// `E key="..." before="..." after="..." concept=<uri> kind=<pref|alt> id=<id> [see="..." ref=<id>]`
pub fn entry_line(entry: &KwicEntry) -> String {
    let mut line = format!(
        "E key=\"{}\" before=\"{}\" after=\"{}\" concept={} kind={} id={}",
        escape_value(entry.key.as_deref().unwrap_or_default()),
        escape_value(entry.before.as_deref().unwrap_or_default()),
        escape_value(entry.after.as_deref().unwrap_or_default()),
        entry.concept_uri,
        entry.kind(),
        entry.id,
    );
    if let Some(xref) = &entry.cross_ref {
        line.push_str(&format!(
            " see=\"{}\" ref={}",
            escape_value(&xref.text),
            xref.ref_id
        ));
    }
    line
}

/// Full records rendering of `index`
pub fn render(index: &KwicIndex) -> String {
    let mut out = header(index);
    out.push('\n');
    for entry in index {
        out.push_str(&entry_line(entry));
        out.push('\n');
    }
    out
}
