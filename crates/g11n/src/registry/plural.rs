//! Pluralization branch selection.

use crate::types::Entry;

/// Select a plural branch for `count`.
///
/// Passes the entry through untouched unless it is a pluralization object
/// and a count was supplied. A selected branch that is absent yields the
/// empty leaf; selection never validates branch presence.
pub(crate) fn pluralize(entry: Entry, count: Option<i64>) -> Entry {
    let Some(count) = count else {
        return entry;
    };
    let Entry::Plural(forms) = entry else {
        return entry;
    };
    match forms.select(count) {
        Some(text) => Entry::Leaf(text.to_string()),
        None => Entry::Leaf(String::new()),
    }
}
