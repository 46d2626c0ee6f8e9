//! Keyword-in-context index generation
//!
//! Every significant word of every label becomes an entry showing the word
//! between its left and right context. Entries of alternate labels carry a
//! cross-reference to the preferred label of their concept.
//!
//! Pipeline: rows -> [`EntryBuilder`] (tokenize, extract context) ->
//! [`Deduplicator`] -> [`Collator`] sort -> [`KwicIndex`].

pub mod builder;
pub mod collate;
pub mod context;
pub mod dedup;
pub mod index;


use serde::Serialize;

use crate::label::{Label, LabelKind};

pub use builder::EntryBuilder;
pub use collate::{CollationKey, Collator};
pub use context::{Context, ContextExtractor, Truncation};
pub use dedup::Deduplicator;
pub use index::{generate, IndexGenerator};

/// One line of the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KwicEntry {
    /// Block id of the originating (concept, label)
    pub id: String,
    pub key: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub concept_uri: String,
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_ref: Option<CrossRef>,
}

impl KwicEntry {
    pub fn kind(&self) -> LabelKind {
        self.label.kind
    }
}

/// Link from an alternate-label entry to the preferred label of its concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossRef {
    /// Block id of the preferred label
    pub ref_id: String,
    pub concept_uri: String,
    /// Preferred label, truncated for display
    pub text: String,
    /// Localized caption, e.g. "USE"
    pub caption: String,
    pub kind: LabelKind,
}

/// A finished, sorted, duplicate-free index for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KwicIndex {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    pub entries: Vec<KwicEntry>,
}

impl KwicIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KwicEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<KwicEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a KwicIndex {
    type Item = &'a KwicEntry;
    type IntoIter = std::slice::Iter<'a, KwicEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
