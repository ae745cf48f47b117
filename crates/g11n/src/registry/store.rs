//! Nested translation storage with deep-merge registration.

use std::collections::btree_map::Entry as MapEntry;

use crate::types::Entry;

/// The nested translation table.
///
/// Shape invariant: the root is always
/// `{namespace: {locale: {…key segments…}: entry}}`. Repeated registration
/// for the same namespace/locale pair deep-merges new keys into existing
/// ones without discarding siblings.
#[derive(Debug)]
pub(crate) struct TranslationStore {
    root: Entry,
}

impl Default for TranslationStore {
    fn default() -> Self {
        TranslationStore { root: Entry::empty() }
    }
}

impl TranslationStore {
    /// Deep-merge `data` under `root[namespace][locale]`.
    pub fn register(&mut self, namespace: &str, locale: &str, data: Entry) {
        let mut locale_map = Entry::empty();
        deep_merge_child(&mut locale_map, locale, data);
        let mut namespace_map = Entry::empty();
        deep_merge_child(&mut namespace_map, namespace, locale_map);
        deep_merge(&mut self.root, namespace_map);
    }

    /// Walk the table one segment at a time, descending only through
    /// subtrees. The first missing or non-tree step short-circuits to `None`.
    pub fn resolve(&self, path: &[String]) -> Option<&Entry> {
        let mut current = &self.root;
        for segment in path {
            current = current.get(segment)?;
        }
        Some(current)
    }
}

/// Merge `incoming` into `target`: subtrees merge recursively per key, every
/// other shape collision replaces atomically (lists included).
fn deep_merge(target: &mut Entry, incoming: Entry) {
    match (target, incoming) {
        (Entry::Tree(existing), Entry::Tree(incoming)) => {
            for (key, value) in incoming {
                match existing.entry(key) {
                    MapEntry::Occupied(mut slot) => deep_merge(slot.get_mut(), value),
                    MapEntry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
        }
        (target, incoming) => *target = incoming,
    }
}

fn deep_merge_child(target: &mut Entry, key: &str, value: Entry) {
    let mut wrapper = std::collections::BTreeMap::new();
    wrapper.insert(key.to_string(), value);
    deep_merge(target, Entry::Tree(wrapper));
}
