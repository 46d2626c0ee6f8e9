//! Locale-aware ordering of index keys
//!
//! Keys are compared at secondary strength: base letters first, with case and
//! accents ignored, then accents as a tie-breaker. Case never orders two keys,
//! so keys differing only by case compare equal and keep their input order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::IndexConfig;
use crate::text::LanguageProfile;

use super::KwicEntry;

/// Sort key of a string at secondary strength
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    /// Lowercased base letters, accents stripped, ligatures expanded
    primary: Vec<char>,
    /// Accent marks attached to each base letter
    secondary: Vec<Vec<char>>,
}

/// Compares index keys for one language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collator {
    backwards_secondary: bool,
}

impl Collator {
    pub fn new(backwards_secondary: bool) -> Self {
        Self {
            backwards_secondary,
        }
    }

    /// Collator for `language`; unknown languages use the default rules
    pub fn for_language(language: &str, config: &IndexConfig) -> Self {
        Self::from_profile(&LanguageProfile::resolve(language, config))
    }

    pub fn from_profile(profile: &LanguageProfile) -> Self {
        Self::new(profile.backwards_secondary)
    }

    pub fn key(&self, text: &str) -> CollationKey {
        let mut primary = Vec::with_capacity(text.len());
        let mut secondary: Vec<Vec<char>> = Vec::with_capacity(text.len());

        for c in text.nfd() {
            for lower in c.to_lowercase() {
                if is_combining_mark(lower) {
                    if let Some(marks) = secondary.last_mut() {
                        marks.push(lower);
                    }
                    continue;
                }
                match fold(lower) {
                    Some((base, mark)) => {
                        for b in base.chars() {
                            primary.push(b);
                            secondary.push(mark.into_iter().collect());
                        }
                    }
                    None => {
                        primary.push(lower);
                        secondary.push(Vec::new());
                    }
                }
            }
        }

        if self.backwards_secondary {
            secondary.reverse();
        }
        CollationKey { primary, secondary }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// Entry order: missing keys first, then collated keys
    pub fn compare_entries(&self, a: &KwicEntry, b: &KwicEntry) -> Ordering {
        match (&a.key, &b.key) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare(a, b),
        }
    }

    /// Stable sort of `entries` by [`Collator::compare_entries`]
    pub fn sort(&self, entries: &mut [KwicEntry]) {
        entries.sort_by_cached_key(|e| e.key.as_deref().map(|k| self.key(k)));
    }
}

/// Letters with no canonical decomposition that still sort with a base letter
fn fold(c: char) -> Option<(&'static str, Option<char>)> {
    match c {
        'æ' => Some(("ae", None)),
        'œ' => Some(("oe", None)),
        'ß' => Some(("ss", None)),
        'ø' => Some(("o", Some('\u{338}'))),
        'ł' => Some(("l", Some('\u{335}'))),
        'đ' => Some(("d", Some('\u{335}'))),
        _ => None,
    }
}
