//! Configuration type definitions

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KwicError;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Index generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Language used when none is given explicitly
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Prefix of generated reference ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Context window extraction and truncation
    #[serde(default)]
    pub context: ContextConfig,

    /// Duplicate entry handling
    #[serde(default)]
    pub dedup: DedupConfig,

    /// Per-language overrides, keyed by primary language subtag
    #[serde(default)]
    pub languages: HashMap<String, LanguageConfig>,
}

/// Context window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Context strings longer than this many characters are truncated
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Characters kept from a truncated context string
    #[serde(default = "default_keep_chars")]
    pub keep_chars: usize,

    /// Marker placed where a context string was cut
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Tokens with fewer characters never produce an entry
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,

    /// Where the next token search starts after a match
    #[serde(default)]
    pub search_advance: SearchAdvance,
}

/// Duplicate handling configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Field comparison rule
    #[serde(default)]
    pub policy: DuplicatePolicy,
}

/// Per-language configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Replaces the built-in stopword list when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<Vec<String>>,

    /// Added to the (built-in or replaced) stopword list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_stopwords: Vec<String>,

    /// Caption shown on cross-references to a preferred label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Compare accents from the end of the word (French dictionary order)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backwards_secondary: Option<bool>,
}

/// Where the search for the next token resumes after a match.
///
/// `MatchStart` re-searches from the start of the previous match, so a word
/// repeated back to back is located at its first occurrence twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAdvance {
    #[default]
    MatchStart,
    MatchEnd,
}

/// How two entries are compared for duplicate removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// A missing field on either side matches anything
    #[default]
    Lenient,
    /// Fields must be equal, missing only matches missing
    Strict,
}

impl FromStr for SearchAdvance {
    type Err = KwicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "match-start" => Ok(SearchAdvance::MatchStart),
            "match-end" => Ok(SearchAdvance::MatchEnd),
            other => Err(KwicError::invalid_value("search advance", other)),
        }
    }
}

impl fmt::Display for SearchAdvance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAdvance::MatchStart => write!(f, "match-start"),
            SearchAdvance::MatchEnd => write!(f, "match-end"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = KwicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(DuplicatePolicy::Lenient),
            "strict" => Ok(DuplicatePolicy::Strict),
            other => Err(KwicError::invalid_value("duplicate policy", other)),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_language: default_language(),
            id_prefix: default_id_prefix(),
            context: ContextConfig::default(),
            dedup: DedupConfig::default(),
            languages: HashMap::new(),
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            keep_chars: default_keep_chars(),
            ellipsis: default_ellipsis(),
            min_token_chars: default_min_token_chars(),
            search_advance: SearchAdvance::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_language() -> String {
    "en".to_string()
}

fn default_id_prefix() -> String {
    "kw".to_string()
}

fn default_max_chars() -> usize {
    40
}

fn default_keep_chars() -> usize {
    37
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_min_token_chars() -> usize {
    2
}
