//! Left/right context extraction around a token occurrence

use crate::config::{ContextConfig, SearchAdvance};

/// Display truncation of context strings, counted in characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    max_chars: usize,
    keep_chars: usize,
    ellipsis: String,
}

impl Truncation {
    pub fn new(max_chars: usize, keep_chars: usize, ellipsis: impl Into<String>) -> Self {
        Self {
            max_chars,
            keep_chars,
            ellipsis: ellipsis.into(),
        }
    }

    pub fn from_config(config: &ContextConfig) -> Self {
        Self::new(config.max_chars, config.keep_chars, config.ellipsis.clone())
    }

    /// Keep the end of `text`: `...` followed by its last characters
    pub fn truncate_start(&self, text: &str) -> String {
        let len = text.chars().count();
        if len <= self.max_chars {
            return text.to_string();
        }
        let tail: String = text.chars().skip(len.saturating_sub(self.keep_chars)).collect();
        format!("{}{}", self.ellipsis, tail)
    }

    /// Keep the start of `text`: its first characters followed by `...`
    pub fn truncate_end(&self, text: &str) -> String {
        if text.chars().count() <= self.max_chars {
            return text.to_string();
        }
        let head: String = text.chars().take(self.keep_chars).collect();
        format!("{}{}", head, self.ellipsis)
    }
}

impl Default for Truncation {
    fn default() -> Self {
        Self::from_config(&ContextConfig::default())
    }
}

/// Context of one token occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Truncated text left of the occurrence
    pub before: String,
    /// Truncated text right of the occurrence
    pub after: String,
    /// Byte offset of the occurrence in the label
    pub start: usize,
    /// Byte offset where the search for the next token starts
    pub next_search: usize,
}

/// Locates tokens in their label, left to right, and cuts the context around them
#[derive(Debug, Clone, Default)]
pub struct ContextExtractor {
    truncation: Truncation,
    advance: SearchAdvance,
}

impl ContextExtractor {
    pub fn new(truncation: Truncation, advance: SearchAdvance) -> Self {
        Self {
            truncation,
            advance,
        }
    }

    pub fn from_config(config: &ContextConfig) -> Self {
        Self::new(Truncation::from_config(config), config.search_advance)
    }

    pub fn truncation(&self) -> &Truncation {
        &self.truncation
    }

    /// Context of the first occurrence of `token` at or after `search_from`.
    ///
    /// Returns `None` when the token does not occur there.
    pub fn extract(&self, label: &str, token: &str, search_from: usize) -> Option<Context> {
        let start = self.locate(label, token, search_from)?;
        let end = start + token.len();

        Some(Context {
            before: self.truncation.truncate_start(&label[..start]),
            after: self.truncation.truncate_end(&label[end..]),
            start,
            next_search: self.advance_from(start, token),
        })
    }

    /// Search offset after `token` without building its context, used for
    /// tokens that are skipped but still consume their occurrence.
    pub fn skip(&self, label: &str, token: &str, search_from: usize) -> Option<usize> {
        self.locate(label, token, search_from)
            .map(|start| self.advance_from(start, token))
    }

    fn locate(&self, label: &str, token: &str, search_from: usize) -> Option<usize> {
        label
            .get(search_from..)?
            .find(token)
            .map(|relative| search_from + relative)
    }

    fn advance_from(&self, start: usize, token: &str) -> usize {
        match self.advance {
            SearchAdvance::MatchStart => start,
            SearchAdvance::MatchEnd => start + token.len(),
        }
    }
}
