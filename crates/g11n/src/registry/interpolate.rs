//! Named-placeholder substitution for resolved templates.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{Entry, Value};

/// sprintf-style named specifiers: `%(name)s` and `%(name)d`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\((\w+)\)[sd]").expect("placeholder pattern is valid"));

/// Substitute `values` into a resolved template.
///
/// A no-op unless the entry is a leaf string and at least one value was
/// supplied. Placeholders naming values that were not supplied stay
/// verbatim in the output rather than erroring.
pub(crate) fn interpolate(entry: Entry, values: &HashMap<String, Value>) -> Entry {
    if values.is_empty() {
        return entry;
    }
    let Entry::Leaf(template) = entry else {
        return entry;
    };
    let substituted = PLACEHOLDER.replace_all(&template, |caps: &Captures<'_>| {
        match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    });
    Entry::Leaf(substituted.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn substitutes_named_values() {
        let entry = interpolate(
            Entry::Leaf("Hello, %(name)s! You have %(count)d new messages.".into()),
            &values! { "name" => "Alice", "count" => 3 },
        );
        assert_eq!(entry, Entry::Leaf("Hello, Alice! You have 3 new messages.".into()));
    }

    #[test]
    fn unknown_placeholders_stay_verbatim() {
        let entry = interpolate(
            Entry::Leaf("Hi %(name)s, bye %(other)s".into()),
            &values! { "name" => "Bob" },
        );
        assert_eq!(entry, Entry::Leaf("Hi Bob, bye %(other)s".into()));
    }

    #[test]
    fn empty_values_pass_through() {
        let entry = Entry::Leaf("Hello, %(name)s!".into());
        assert_eq!(interpolate(entry.clone(), &HashMap::new()), entry);
    }

    #[test]
    fn non_leaf_entries_pass_through() {
        let entry = Entry::empty();
        assert_eq!(interpolate(entry.clone(), &values! { "x" => 1 }), entry);
    }
}
