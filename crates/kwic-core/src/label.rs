//! Label rows consumed by the index generator

use std::fmt;

use serde::{Deserialize, Serialize};

/// One (concept, label, preferred label) row from a row source.
///
/// `pref_label` is set only when `label` is an alternate label of the concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRow {
    #[serde(alias = "concept")]
    pub concept_uri: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref_label: Option<String>,
}

impl LabelRow {
    /// Row for a preferred label
    pub fn pref(concept_uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            concept_uri: concept_uri.into(),
            label: label.into(),
            pref_label: None,
        }
    }

    /// Row for an alternate label pointing back to its preferred label
    pub fn alt(
        concept_uri: impl Into<String>,
        label: impl Into<String>,
        pref_label: impl Into<String>,
    ) -> Self {
        Self {
            concept_uri: concept_uri.into(),
            label: label.into(),
            pref_label: Some(pref_label.into()),
        }
    }

    pub fn kind(&self) -> LabelKind {
        if self.pref_label.is_some() {
            LabelKind::Alt
        } else {
            LabelKind::Pref
        }
    }

    /// Rows with nothing but whitespace in the label cannot produce entries
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty()
    }
}

/// Whether a label is the preferred or an alternate label of its concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    Pref,
    Alt,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Pref => write!(f, "pref"),
            LabelKind::Alt => write!(f, "alt"),
        }
    }
}

/// Label text tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub kind: LabelKind,
}
