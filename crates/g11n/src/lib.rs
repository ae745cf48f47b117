//! Runtime translation lookup and locale-aware date/time formatting.
//!
//! Translation data is a nested table keyed by namespace, locale, and
//! dotted key path. Lookup resolves a key against the current (or
//! overridden) context, applies zero/one/other pluralization, and
//! substitutes `%(name)s`-style named values into the result. A date/time
//! localizer composes the same lookup to fetch format templates and
//! localized month/day names.
//!
//! # Example
//!
//! ```
//! use g11n::{Registry, TranslateOptions};
//!
//! let mut registry = Registry::new();
//! registry.register_translations("app", "en", serde_json::json!({
//!     "inbox": { "zero": "No messages", "one": "One message", "other": "%(count)s messages" },
//! }));
//!
//! let text = registry
//!     .translate("inbox", TranslateOptions::builder().namespace("app").count(3).build())
//!     .unwrap();
//! assert_eq!(text.to_string(), "3 messages");
//! ```
//!
//! A process-wide registry lives behind the [`global`] facade; its
//! functions (`translate`, `set_locale`, `with_locale`, …) are re-exported
//! at the crate root.

pub mod error;
pub mod formatter;
pub mod global;
mod locales;
pub mod registry;
pub mod types;

pub use error::TranslateError;
pub use formatter::Names;
pub use global::{
    locale, localize, off_locale_change, on_locale_change, register_translations, set_locale,
    translate, with_locale, with_namespace, with_registry, with_registry_mut,
};
pub use registry::{ListenerId, LocalizeOptions, Registry, TranslateOptions};
pub use types::{Entry, Key, PluralForms, Value};

/// Creates a `HashMap<String, Value>` of interpolation values.
///
/// Values are converted via `Into<Value>`, so integers, floats, and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use g11n::{values, Value};
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v["count"], Value::Number(3));
/// assert_eq!(v["name"], Value::String("Alice".to_string()));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
