//! Change entries and the merged change set

use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Category keys the renderer knows about, in output order.
pub const RECOGNIZED_CATEGORIES: [&str; 3] = ["new", "updated", "fixed"];

/// Value bound to a category key in an entry document.
///
/// Entries are trusted input: anything that isn't a list of strings is
/// carried through the merge opaquely and ignored by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Items(Vec<String>),
    Other(serde_yaml::Value),
}

/// One parsed change-entry document: a mapping from category name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeEntry(pub BTreeMap<String, CategoryValue>);

impl ChangeEntry {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Merged collection of entries, keyed by category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet {
    categories: BTreeMap<String, CategoryValue>,
}

impl ChangeSet {
    /// The canonical empty set: the three recognized categories, each bound
    /// to an empty list.
    pub fn new() -> Self {
        let mut categories = BTreeMap::new();
        for key in RECOGNIZED_CATEGORIES {
            categories.insert(key.to_string(), CategoryValue::Items(Vec::new()));
        }
        Self { categories }
    }

    /// Fold one entry into the set.
    ///
    /// Lists concatenate onto existing lists (entry order, then within-entry
    /// order, never deduplicated); any other pairing overwrites, last write
    /// wins. Unknown keys are introduced as-is.
    pub fn absorb(&mut self, entry: ChangeEntry) {
        for (key, value) in entry.0 {
            match self.categories.entry(key) {
                Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                    (CategoryValue::Items(existing), CategoryValue::Items(incoming)) => {
                        existing.extend(incoming);
                    }
                    (current, value) => {
                        *current = value;
                    }
                },
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }
    }

    /// Items recorded under `key`; empty for unknown or non-list categories.
    pub fn items(&self, key: &str) -> &[String] {
        match self.categories.get(key) {
            Some(CategoryValue::Items(items)) => items,
            _ => &[],
        }
    }

    /// True when all recognized categories are empty (nothing to publish).
    pub fn is_empty(&self) -> bool {
        RECOGNIZED_CATEGORIES
            .iter()
            .all(|key| self.items(key).is_empty())
    }
}

impl Default for ChangeSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge entries in discovery order into one canonical change set.
pub fn merge(entries: Vec<ChangeEntry>) -> ChangeSet {
    let mut changes = ChangeSet::new();
    for entry in entries {
        changes.absorb(entry);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(yaml: &str) -> ChangeEntry {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_merge_no_entries_is_canonical_empty() {
        let changes = merge(Vec::new());
        assert!(changes.is_empty());
        assert!(changes.items("new").is_empty());
        assert!(changes.items("updated").is_empty());
        assert!(changes.items("fixed").is_empty());
    }

    #[test]
    fn test_merge_concatenates_in_entry_order() {
        let changes = merge(vec![entry("new: [a]"), entry("new: [b]")]);
        assert_eq!(changes.items("new"), ["a", "b"]);
    }

    #[test]
    fn test_merge_never_deduplicates() {
        let changes = merge(vec![entry("fixed: [same]"), entry("fixed: [same]")]);
        assert_eq!(changes.items("fixed"), ["same", "same"]);
    }

    #[test]
    fn test_merge_preserves_within_entry_order() {
        let changes = merge(vec![
            entry("updated: [one, two]"),
            entry("updated: [three]"),
        ]);
        assert_eq!(changes.items("updated"), ["one", "two", "three"]);
    }

    #[test]
    fn test_merge_keeps_unknown_categories() {
        let changes = merge(vec![entry("cows: [moo]"), entry("cows: [moo again]")]);
        assert_eq!(changes.items("cows"), ["moo", "moo again"]);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_merge_overwrites_non_list_values() {
        let changes = merge(vec![entry("new: [a]"), entry("new: not a list")]);
        assert!(changes.items("new").is_empty());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_entries_with_empty_lists_stay_empty() {
        let changes = merge(vec![entry("new: []\nupdated: []\nfixed: []")]);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_parse_entry_with_mixed_shapes() {
        let parsed = entry("new: [feature]\nnote: 42");
        assert_eq!(
            parsed.0.get("new"),
            Some(&CategoryValue::Items(vec!["feature".to_string()]))
        );
        assert!(matches!(
            parsed.0.get("note"),
            Some(CategoryValue::Other(_))
        ));
    }
}
