use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use serde_json::Value as JsonValue;

/// A value stored in (or resolved from) the translation table.
///
/// Translation data is shape-polymorphic: a path may end at a plain string,
/// at a pluralization object, at a list (e.g. month names), or at an
/// intermediate subtree. `Entry` makes each case an explicit variant instead
/// of relying on runtime type inspection.
///
/// # Example
///
/// ```
/// use g11n::Entry;
///
/// let entry = Entry::from(serde_json::json!({
///     "greeting": "Hello, %(name)s!",
///     "items": { "one": "1 item", "other": "%(count)s items" },
/// }));
///
/// assert!(matches!(entry.get("greeting"), Some(Entry::Leaf(_))));
/// assert!(matches!(entry.get("items"), Some(Entry::Plural(_))));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A directly usable template string.
    Leaf(String),

    /// Count-sensitive branches (zero/one/other).
    Plural(PluralForms),

    /// An ordered list of entries (treated atomically on merge).
    List(Vec<Entry>),

    /// An intermediate subtree keyed by path segment.
    Tree(BTreeMap<String, Entry>),
}

/// Branches of a pluralization object.
///
/// Any branch may be absent; selection does not validate presence.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PluralForms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl PluralForms {
    /// Select a branch for `count`: `zero` wins for an exact zero when
    /// present, then `one` for an exact one, else `other`.
    pub fn select(&self, count: i64) -> Option<&str> {
        if count == 0 && self.zero.is_some() {
            return self.zero.as_deref();
        }
        if count == 1 {
            self.one.as_deref()
        } else {
            self.other.as_deref()
        }
    }
}

impl Entry {
    /// Get a direct child by path segment. Only subtrees have children.
    pub fn get(&self, segment: &str) -> Option<&Entry> {
        match self {
            Entry::Tree(children) => children.get(segment),
            _ => None,
        }
    }

    /// The template string, if this entry is a leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Entry::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// An empty subtree, the identity element for deep merging.
    pub fn empty() -> Entry {
        Entry::Tree(BTreeMap::new())
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Entry::Leaf(text) => f.write_str(text),
            other => {
                let json = serde_json::to_string(other).map_err(|_| std::fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Leaf(text.to_string())
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::Leaf(text)
    }
}

/// Converts arbitrary JSON translation data into the tagged model.
///
/// Objects whose keys form a non-empty subset of `{zero, one, other}` with
/// all-string values become [`Entry::Plural`]; every other object becomes a
/// subtree. Scalars become leaves of their display form. Null-valued members
/// are dropped so that resolving through them reports a missing translation.
impl From<JsonValue> for Entry {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(text) => Entry::Leaf(text),
            JsonValue::Number(n) => Entry::Leaf(n.to_string()),
            JsonValue::Bool(b) => Entry::Leaf(b.to_string()),
            JsonValue::Array(items) => Entry::List(items.into_iter().map(Entry::from).collect()),
            JsonValue::Object(members) => {
                if is_plural_shape(&members) {
                    let mut forms = PluralForms::default();
                    for (key, value) in members {
                        let JsonValue::String(text) = value else {
                            continue;
                        };
                        match key.as_str() {
                            "zero" => forms.zero = Some(text),
                            "one" => forms.one = Some(text),
                            _ => forms.other = Some(text),
                        }
                    }
                    Entry::Plural(forms)
                } else {
                    Entry::Tree(
                        members
                            .into_iter()
                            .filter(|(_, value)| !value.is_null())
                            .map(|(key, value)| (key, Entry::from(value)))
                            .collect(),
                    )
                }
            }
            JsonValue::Null => Entry::empty(),
        }
    }
}

fn is_plural_shape(members: &serde_json::Map<String, JsonValue>) -> bool {
    !members.is_empty()
        && members
            .iter()
            .all(|(key, value)| matches!(key.as_str(), "zero" | "one" | "other") && value.is_string())
}
