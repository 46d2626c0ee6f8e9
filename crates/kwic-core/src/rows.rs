//! Streaming label rows from JSON Lines

use std::io::BufRead;

use crate::error::{KwicError, Result};
use crate::label::LabelRow;

/// Rows read lazily from `reader`, one JSON object per line.
///
/// Blank lines are skipped. A line that is not a valid row yields
/// [`KwicError::InvalidRow`] with its 1-based line number.
pub fn read_rows<R: BufRead>(reader: R) -> impl Iterator<Item = Result<LabelRow>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Err(e) => Some(Err(KwicError::Io(e))),
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(
                serde_json::from_str::<LabelRow>(&line)
                    .map_err(|e| KwicError::invalid_row(idx + 1, e)),
            ),
        })
}
