//! Case-insensitive name resolution for the roster tables.

use crate::casemap::CaseMapping;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// Maps the casefolded form of each stored name to the key it is stored under.
///
/// A stored key is always reachable through the folded form of its own name,
/// unless another key folds to the same string; that can only happen after
/// the casemapping changes, and the first key indexed wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameIndex {
    casemapping: CaseMapping,
    folded: HashMap<String, String>,
}

impl NameIndex {
    pub fn new(casemapping: CaseMapping) -> Self {
        Self {
            casemapping,
            folded: HashMap::new(),
        }
    }

    /// The casemapping the index was built with
    pub fn casemapping(&self) -> CaseMapping {
        self.casemapping
    }

    /// The stored key matching `name`, ignoring case
    pub fn get(&self, name: &str) -> Option<&String> {
        self.folded.get(&self.casemapping.fold(name))
    }

    pub fn insert(&mut self, key: &str) {
        let folded = self.casemapping.fold(key);
        match self.folded.get(&folded) {
            Some(existing) if existing != key => {
                tracing::debug!("{} already indexed as {}, not indexing {}", folded, existing, key);
            }
            Some(_) => (),
            None => {
                self.folded.insert(folded, key.to_string());
            }
        }
    }

    /// Drop `key` from the index. Another key sharing its folded form is left alone.
    pub fn remove(&mut self, key: &str) {
        let folded = self.casemapping.fold(key);
        if self.folded.get(&folded).map_or(false, |existing| existing == key) {
            self.folded.remove(&folded);
        }
    }

    pub fn clear(&mut self) {
        self.folded.clear();
    }

    /// Re-fold every key under a new casemapping.
    pub fn rebuild<'a>(&mut self, casemapping: CaseMapping, keys: impl Iterator<Item = &'a String>) {
        self.casemapping = casemapping;
        self.folded.clear();
        for key in keys {
            self.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_any_case() {
        let mut index = NameIndex::new(CaseMapping::Rfc1459);
        index.insert("Alice[m]");

        assert_eq!(index.get("alice{M}").map(String::as_str), Some("Alice[m]"));
        assert_eq!(index.get("bob"), None);
    }

    #[test]
    fn remove_only_drops_the_matching_key() {
        let mut index = NameIndex::new(CaseMapping::Ascii);
        index.insert("Alice");
        index.remove("ALICE");
        assert_eq!(index.get("alice").map(String::as_str), Some("Alice"));

        index.remove("Alice");
        assert_eq!(index, NameIndex::new(CaseMapping::Ascii));
    }

    #[test]
    fn rebuild_refolds() {
        let keys = vec!["[bot]".to_string(), "Carol".to_string()];
        let mut index = NameIndex::new(CaseMapping::Rfc1459);
        index.rebuild(CaseMapping::Rfc1459, keys.iter());
        assert!(index.get("{BOT}").is_some());

        index.rebuild(CaseMapping::Ascii, keys.iter());
        assert_eq!(index.casemapping(), CaseMapping::Ascii);
        assert_eq!(index.get("{BOT}"), None);
        assert_eq!(index.get("[BOT]").map(String::as_str), Some("[bot]"));
        assert_eq!(index.get("CAROL").map(String::as_str), Some("Carol"));
    }
}
