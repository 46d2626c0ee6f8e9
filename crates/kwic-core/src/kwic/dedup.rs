//! Duplicate entry removal

use crate::config::DuplicatePolicy;

use super::KwicEntry;

/// Accumulates entries in insertion order, dropping structural duplicates.
///
/// Two entries are duplicates when `key`, `before` and `after` all match
/// under the configured [`DuplicatePolicy`]. The check is a linear scan over
/// everything accepted so far.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    policy: DuplicatePolicy,
    entries: Vec<KwicEntry>,
    dropped: usize,
}

impl Deduplicator {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
            dropped: 0,
        }
    }

    /// Accept `entry` unless an equal one is already held
    #[must_use]
    pub fn add(mut self, entry: KwicEntry) -> Self {
        if self.contains(&entry) {
            self.dropped += 1;
        } else {
            self.entries.push(entry);
        }
        self
    }

    pub fn contains(&self, entry: &KwicEntry) -> bool {
        self.entries
            .iter()
            .any(|existing| is_duplicate(self.policy, existing, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries rejected as duplicates
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_entries(self) -> Vec<KwicEntry> {
        self.entries
    }
}

impl Extend<KwicEntry> for Deduplicator {
    fn extend<T: IntoIterator<Item = KwicEntry>>(&mut self, iter: T) {
        for entry in iter {
            let this = std::mem::take(self);
            *self = this.add(entry);
        }
    }
}

/// Whether `a` and `b` are the same index line
pub fn is_duplicate(policy: DuplicatePolicy, a: &KwicEntry, b: &KwicEntry) -> bool {
    field_matches(policy, &a.key, &b.key)
        && field_matches(policy, &a.before, &b.before)
        && field_matches(policy, &a.after, &b.after)
}

fn field_matches(policy: DuplicatePolicy, a: &Option<String>, b: &Option<String>) -> bool {
    match (policy, a, b) {
        (DuplicatePolicy::Lenient, None, _) | (DuplicatePolicy::Lenient, _, None) => true,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{Label, LabelKind};

    fn entry(
        key: Option<&str>,
        before: Option<&str>,
        after: Option<&str>,
        concept: &str,
    ) -> KwicEntry {
        KwicEntry {
            id: format!("kw-{concept}"),
            key: key.map(String::from),
            before: before.map(String::from),
            after: after.map(String::from),
            concept_uri: concept.to_string(),
            label: Label {
                text: "label".to_string(),
                kind: LabelKind::Pref,
            },
            cross_ref: None,
        }
    }

    #[test]
    fn test_same_entry_twice_is_kept_once() {
        let e = entry(Some("Cats"), Some("Big "), Some(""), "c1");
        let dedup = Deduplicator::default().add(e.clone()).add(e);
        assert_eq!(dedup.len(), 1);
        assert_eq!(dedup.dropped(), 1);
    }

    #[test]
    fn test_equality_ignores_concept() {
        let dedup = Deduplicator::default()
            .add(entry(Some("Cats"), Some("Big "), Some(""), "c1"))
            .add(entry(Some("Cats"), Some("Big "), Some(""), "c2"));
        let entries = dedup.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].concept_uri, "c1");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let dedup = Deduplicator::default()
            .add(entry(Some("zebra"), Some(""), Some(""), "c1"))
            .add(entry(Some("apple"), Some(""), Some(""), "c2"))
            .add(entry(Some("mango"), Some(""), Some(""), "c3"));
        let keys: Vec<_> = dedup
            .into_entries()
            .into_iter()
            .filter_map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_different_context_is_not_a_duplicate() {
        let dedup = Deduplicator::default()
            .add(entry(Some("Cats"), Some("Big "), Some(""), "c1"))
            .add(entry(Some("Cats"), Some("Wild "), Some(""), "c2"));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_lenient_missing_field_matches_anything() {
        let dedup = Deduplicator::new(DuplicatePolicy::Lenient)
            .add(entry(Some("Cats"), Some("Big "), Some(""), "c1"))
            .add(entry(Some("Cats"), None, Some(""), "c2"));
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn test_strict_missing_field_only_matches_missing() {
        let dedup = Deduplicator::new(DuplicatePolicy::Strict)
            .add(entry(Some("Cats"), Some("Big "), Some(""), "c1"))
            .add(entry(Some("Cats"), None, Some(""), "c2"))
            .add(entry(Some("Cats"), None, Some(""), "c3"));
        assert_eq!(dedup.len(), 2);
        assert_eq!(dedup.dropped(), 1);
    }

    #[test]
    fn test_extend() {
        let mut dedup = Deduplicator::default();
        dedup.extend(vec![
            entry(Some("a1"), Some(""), Some(""), "c1"),
            entry(Some("a1"), Some(""), Some(""), "c2"),
            entry(Some("b2"), Some(""), Some(""), "c3"),
        ]);
        assert_eq!(dedup.len(), 2);
    }
}
