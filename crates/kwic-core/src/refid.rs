//! Reference ids linking index entries to the blocks they describe
//!
//! An id is derived from `(concept, label)` only, so the id a cross-reference
//! points to is the block id of the preferred-label entries it names.

use sha2::{Digest, Sha256};

use crate::error::Result;

/// Computes stable identifiers for `(concept, label)` pairs
pub trait RefIdGenerator {
    /// Id of the block holding the entries of `label` for `concept_uri`
    fn block_id(&self, concept_uri: &str, label: &str) -> Result<String>;

    /// Id a cross-reference to `label` of `concept_uri` points to
    fn ref_id(&self, concept_uri: &str, label: &str) -> Result<String> {
        self.block_id(concept_uri, label)
    }
}

/// Hash-based ids: `<prefix>-<hex>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRefIds {
    prefix: String,
}

impl HashRefIds {
    /// Hex characters kept from the SHA-256 digest
    pub const HASH_LEN: usize = 12;

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for HashRefIds {
    fn default() -> Self {
        Self::new("kw")
    }
}

impl RefIdGenerator for HashRefIds {
    fn block_id(&self, concept_uri: &str, label: &str) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(concept_uri.as_bytes());
        // unit separator keeps ("ab", "c") and ("a", "bc") apart
        hasher.update([0x1f]);
        hasher.update(label.as_bytes());
        let full_hex = hex::encode(hasher.finalize());

        Ok(format!("{}-{}", self.prefix, &full_hex[..Self::HASH_LEN]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_deterministic() {
        let ids = HashRefIds::default();
        let a = ids.block_id("http://ex.org/c1", "Big Cats").unwrap();
        let b = ids.block_id("http://ex.org/c1", "Big Cats").unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("kw-"));
        assert_eq!(a.len(), "kw-".len() + HashRefIds::HASH_LEN);
    }

    #[test]
    fn test_ids_differ_per_concept_and_label() {
        let ids = HashRefIds::new("idx");
        let base = ids.block_id("c1", "Big Cats").unwrap();
        assert_ne!(base, ids.block_id("c2", "Big Cats").unwrap());
        assert_ne!(base, ids.block_id("c1", "Felines").unwrap());
        assert_ne!(
            ids.block_id("ab", "c").unwrap(),
            ids.block_id("a", "bc").unwrap()
        );
    }

    #[test]
    fn test_ref_id_resolves_to_block_id() {
        let ids = HashRefIds::default();
        assert_eq!(
            ids.ref_id("c1", "Big Cats").unwrap(),
            ids.block_id("c1", "Big Cats").unwrap()
        );
    }
}
