//! In-memory thesaurus acting as a label row source
//!
//! Rows follow the labels-in-scheme selection: preferred labels in the
//! requested language, alternate labels paired with every preferred label in
//! that language, and the concept URI itself for concepts without any
//! preferred label in that language.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KwicError, Result};
use crate::label::LabelRow;

/// A literal with its language tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangString {
    pub value: String,
    #[serde(default)]
    pub lang: String,
}

impl LangString {
    pub fn new(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: lang.into(),
        }
    }

    /// Language tags compare case-insensitively
    pub fn is_in(&self, lang: &str) -> bool {
        self.lang.eq_ignore_ascii_case(lang)
    }
}

/// A concept with its labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub uri: String,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub pref_labels: Vec<LangString>,
    #[serde(default)]
    pub alt_labels: Vec<LangString>,
}

impl Concept {
    pub fn in_scheme(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s == scheme)
    }
}

/// A set of concepts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thesaurus {
    pub concepts: Vec<Concept>,
}

impl Thesaurus {
    pub fn new(concepts: Vec<Concept>) -> Self {
        Self { concepts }
    }

    /// Read a JSON array of concepts
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                KwicError::not_found("thesaurus file", path.display())
            } else {
                KwicError::Io(e)
            }
        })?;
        let thesaurus = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            concepts = thesaurus.concepts.len(),
            "thesaurus_loaded"
        );
        Ok(thesaurus)
    }

    /// Label rows of the concepts in `scheme` (all concepts when `None`) for `lang`
    pub fn labels(&self, lang: &str, scheme: Option<&str>) -> Vec<LabelRow> {
        let mut rows = Vec::new();

        for concept in &self.concepts {
            if scheme.is_some_and(|s| !concept.in_scheme(s)) {
                continue;
            }

            let prefs: Vec<&LangString> = concept
                .pref_labels
                .iter()
                .filter(|l| l.is_in(lang))
                .collect();

            if prefs.is_empty() {
                rows.push(LabelRow::pref(&concept.uri, &concept.uri));
                continue;
            }

            for pref in &prefs {
                rows.push(LabelRow::pref(&concept.uri, &pref.value));
            }
            for alt in concept.alt_labels.iter().filter(|l| l.is_in(lang)) {
                for pref in &prefs {
                    rows.push(LabelRow::alt(&concept.uri, &alt.value, &pref.value));
                }
            }
        }

        rows
    }
}
