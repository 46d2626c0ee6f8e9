//! Label tokenization with per-language stopword suppression

pub mod stopwords;

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::{primary_subtag, IndexConfig};

/// Cross-reference caption for languages without a configured one
const DEFAULT_CAPTION: &str = "USE";

/// A word of a label and its byte offset in that label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub offset: usize,
}

impl Token {
    /// Length in characters, which is what entry filtering counts
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Stopwords, caption and collation rules resolved for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Primary subtag, empty for the language-neutral profile
    pub tag: String,
    stopwords: HashSet<String>,
    pub caption: String,
    pub backwards_secondary: bool,
}

impl LanguageProfile {
    /// Resolve the profile for `language`, applying overrides from `config`.
    ///
    /// Languages with neither a built-in profile nor a config section get the
    /// neutral profile: no stopwords and default collation rules.
    pub fn resolve(language: &str, config: &IndexConfig) -> Self {
        let tag = primary_subtag(language);
        let (builtin_stopwords, builtin_caption, builtin_backwards): (&[&str], &str, bool) =
            match tag.as_str() {
                "en" => (stopwords::ENGLISH, "USE", false),
                "fr" => (stopwords::FRENCH, "EM", true),
                _ => (&[], DEFAULT_CAPTION, false),
            };

        let overrides = config.language(&tag);
        if overrides.is_none() && builtin_stopwords.is_empty() && !tag.is_empty() {
            tracing::debug!(language, "no analysis profile, using neutral tokenizer");
        }

        let mut stopwords: HashSet<String> = match overrides.and_then(|o| o.stopwords.as_ref()) {
            Some(replaced) => replaced.iter().map(|w| fold_stopword(w)).collect(),
            None => builtin_stopwords.iter().map(|w| w.to_string()).collect(),
        };
        if let Some(o) = overrides {
            stopwords.extend(o.extra_stopwords.iter().map(|w| fold_stopword(w)));
        }

        Self {
            caption: overrides
                .and_then(|o| o.caption.clone())
                .unwrap_or_else(|| builtin_caption.to_string()),
            backwards_secondary: overrides
                .and_then(|o| o.backwards_secondary)
                .unwrap_or(builtin_backwards),
            tag,
            stopwords,
        }
    }

    /// The neutral profile, independent of any configuration
    pub fn neutral() -> Self {
        Self {
            tag: String::new(),
            stopwords: HashSet::new(),
            caption: DEFAULT_CAPTION.to_string(),
            backwards_secondary: false,
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        !self.stopwords.is_empty() && self.stopwords.contains(&fold_stopword(word))
    }
}

/// Composed, lowercased form used for stopword comparison
fn fold_stopword(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

/// Splits labels into significant words for one language.
///
/// Words are maximal runs of alphanumeric characters and the combining marks
/// that follow them; case is preserved so tokens can be found again in the
/// label they came from.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    profile: LanguageProfile,
}

impl Tokenizer {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }

    /// Tokenizer for `language` with the overrides of `config`
    pub fn for_language(language: &str, config: &IndexConfig) -> Self {
        Self::new(LanguageProfile::resolve(language, config))
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Tokens of `label` in left-to-right order, stopwords removed.
    ///
    /// Single-character tokens are kept; callers decide whether to index them.
    pub fn tokenize(&self, label: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, c) in label.char_indices() {
            // Combining marks continue a word so decomposed labels stay whole
            let in_word = c.is_alphanumeric() || (start.is_some() && is_combining_mark(c));
            match (in_word, start) {
                (true, None) => start = Some(idx),
                (false, Some(s)) => {
                    self.push_word(&mut tokens, label, s, idx);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            self.push_word(&mut tokens, label, s, label.len());
        }

        tokens
    }

    fn push_word(&self, tokens: &mut Vec<Token>, label: &str, start: usize, end: usize) {
        let word = &label[start..end];
        if !self.profile.is_stopword(word) {
            tokens.push(Token {
                text: word.to_string(),
                offset: start,
            });
        }
    }
}
