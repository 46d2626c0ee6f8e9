//! Index assembly: rows in, sorted entries out

use std::time::Instant;

use tracing::debug;

use crate::config::IndexConfig;
use crate::error::Result;
use crate::label::LabelRow;
use crate::refid::{HashRefIds, RefIdGenerator};

use super::builder::EntryBuilder;
use super::collate::Collator;
use super::dedup::Deduplicator;
use super::KwicIndex;

/// Generates KWIC indexes from label rows.
///
/// Each call owns its accumulator, so one generator can serve several
/// languages or scopes, including from different threads when the id
/// generator allows it.
pub struct IndexGenerator<'a> {
    config: &'a IndexConfig,
    ref_ids: &'a dyn RefIdGenerator,
}

impl<'a> IndexGenerator<'a> {
    pub fn new(config: &'a IndexConfig, ref_ids: &'a dyn RefIdGenerator) -> Self {
        Self { config, ref_ids }
    }

    /// Index of all `rows` for `language`
    pub fn generate<I>(&self, rows: I, language: &str) -> Result<KwicIndex>
    where
        I: IntoIterator<Item = Result<LabelRow>>,
    {
        self.generate_in_scheme(rows, language, None)
    }

    /// Index of `rows` for `language`, tagged with the concept scheme they were read from.
    ///
    /// The row source is consumed to completion before sorting. Rows with an
    /// empty label are skipped; row source and id generator errors are returned
    /// as they are and no partial index is produced.
    pub fn generate_in_scheme<I>(
        &self,
        rows: I,
        language: &str,
        scheme: Option<&str>,
    ) -> Result<KwicIndex>
    where
        I: IntoIterator<Item = Result<LabelRow>>,
    {
        let span = tracing::debug_span!("kwic_generate", language, scheme = scheme.unwrap_or(""));
        let _guard = span.enter();

        let start = Instant::now();
        let builder = EntryBuilder::for_language(language, self.config, self.ref_ids);
        let mut dedup = Deduplicator::new(self.config.dedup.policy);
        let mut row_count = 0usize;
        let mut skipped = 0usize;

        for row in rows {
            let row = row?;
            row_count += 1;
            if row.is_blank() {
                skipped += 1;
                debug!(concept = %row.concept_uri, "skipping row with empty label");
                continue;
            }
            for entry in builder.build(&row)? {
                dedup = dedup.add(entry);
            }
        }
        crate::trace_time!(start, "build_entries", rows = row_count);

        let duplicates = dedup.dropped();
        let mut entries = dedup.into_entries();

        let sort_start = Instant::now();
        Collator::from_profile(builder.tokenizer().profile()).sort(&mut entries);
        crate::trace_time!(sort_start, "sort_entries", entries = entries.len());

        debug!(
            rows = row_count,
            skipped,
            duplicates,
            entries = entries.len(),
            "kwic_generated"
        );

        Ok(KwicIndex {
            language: language.to_string(),
            scheme: scheme.map(String::from),
            entries,
        })
    }
}

/// Index of in-memory `rows` for `language` with the default configuration
pub fn generate<I>(rows: I, language: &str) -> Result<KwicIndex>
where
    I: IntoIterator<Item = LabelRow>,
{
    let config = IndexConfig::default();
    let ref_ids = HashRefIds::new(config.id_prefix.clone());
    IndexGenerator::new(&config, &ref_ids).generate(rows.into_iter().map(Ok), language)
}
