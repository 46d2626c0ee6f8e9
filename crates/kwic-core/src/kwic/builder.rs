//! Builds the entries of one label row

use crate::config::IndexConfig;
use crate::error::Result;
use crate::label::{Label, LabelKind, LabelRow};
use crate::refid::RefIdGenerator;
use crate::text::Tokenizer;

use super::context::ContextExtractor;
use super::{CrossRef, KwicEntry};

/// Turns a [`LabelRow`] into one [`KwicEntry`] per significant token
pub struct EntryBuilder<'a> {
    tokenizer: Tokenizer,
    extractor: ContextExtractor,
    min_token_chars: usize,
    ref_ids: &'a dyn RefIdGenerator,
}

impl<'a> EntryBuilder<'a> {
    pub fn new(
        tokenizer: Tokenizer,
        extractor: ContextExtractor,
        min_token_chars: usize,
        ref_ids: &'a dyn RefIdGenerator,
    ) -> Self {
        Self {
            tokenizer,
            extractor,
            min_token_chars,
            ref_ids,
        }
    }

    /// Builder for `language` configured from `config`
    pub fn for_language(
        language: &str,
        config: &IndexConfig,
        ref_ids: &'a dyn RefIdGenerator,
    ) -> Self {
        Self::new(
            Tokenizer::for_language(language, config),
            ContextExtractor::from_config(&config.context),
            config.context.min_token_chars,
            ref_ids,
        )
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Entries of `row`, left to right.
    ///
    /// Either every entry of the row is returned or the id generator error is.
    pub fn build(&self, row: &LabelRow) -> Result<Vec<KwicEntry>> {
        let text = row.label.as_str();
        let tokens = self.tokenizer.tokenize(text);
        if !tokens
            .iter()
            .any(|t| t.char_len() >= self.min_token_chars)
        {
            return Ok(Vec::new());
        }

        let label = Label {
            text: text.to_string(),
            kind: row.kind(),
        };
        let block_id = self.ref_ids.block_id(&row.concept_uri, text)?;
        let cross_ref = match &row.pref_label {
            Some(pref) => Some(self.cross_ref(&row.concept_uri, pref)?),
            None => None,
        };

        let mut entries = Vec::new();
        let mut search_from = 0;
        for token in &tokens {
            if token.char_len() < self.min_token_chars {
                if let Some(next) = self.extractor.skip(text, &token.text, search_from) {
                    search_from = next;
                }
                continue;
            }

            let Some(ctx) = self.extractor.extract(text, &token.text, search_from) else {
                tracing::debug!(label = text, token = %token.text, "token not found in label");
                continue;
            };
            search_from = ctx.next_search;

            entries.push(KwicEntry {
                id: block_id.clone(),
                key: Some(token.text.clone()),
                before: Some(ctx.before),
                after: Some(ctx.after),
                concept_uri: row.concept_uri.clone(),
                label: label.clone(),
                cross_ref: cross_ref.clone(),
            });
        }

        Ok(entries)
    }

    fn cross_ref(&self, concept_uri: &str, pref_label: &str) -> Result<CrossRef> {
        Ok(CrossRef {
            ref_id: self.ref_ids.ref_id(concept_uri, pref_label)?,
            concept_uri: concept_uri.to_string(),
            text: self.extractor.truncation().truncate_end(pref_label),
            caption: self.tokenizer.profile().caption.clone(),
            kind: LabelKind::Pref,
        })
    }
}
