//! The translation registry: lookup state, context switching, and the
//! resolve → pluralize → interpolate pipeline.

mod interpolate;
mod keys;
mod observers;
mod plural;
mod store;

pub use observers::ListenerId;

use std::collections::HashMap;
use std::mem;

use bon::Builder;
use chrono::{Datelike, Timelike};

use crate::error::TranslateError;
use crate::formatter::{self, Names};
use crate::locales;
use crate::registry::interpolate::interpolate;
use crate::registry::keys::KeyCache;
use crate::registry::observers::LocaleObservers;
use crate::registry::plural::pluralize;
use crate::registry::store::TranslationStore;
use crate::types::{Entry, Key, Value};

/// Options for [`Registry::translate`].
///
/// `namespace` and `locale` default to the registry's current context and
/// are consumed before interpolation; everything in `values` (plus `count`,
/// when set) is available to placeholder substitution.
#[derive(Builder, Default)]
#[builder(on(String, into))]
pub struct TranslateOptions {
    /// Namespace override; defaults to the current namespace.
    pub namespace: Option<String>,

    /// Locale override; defaults to the current locale.
    pub locale: Option<String>,

    /// Count for plural branch selection. Also interpolatable as
    /// `%(count)s` unless shadowed by an explicit value.
    pub count: Option<i64>,

    /// Returned instead of the `"missing translation: …"` marker when the
    /// key does not resolve.
    #[builder(into)]
    pub fallback: Option<Entry>,

    /// Named interpolation values.
    #[builder(default)]
    pub values: HashMap<String, Value>,
}

/// Options for [`Registry::localize`].
#[derive(Builder, Default)]
#[builder(on(String, into))]
pub struct LocalizeOptions {
    /// Namespace holding the format templates; defaults to
    /// `"globalization"`.
    pub namespace: Option<String>,

    /// Locale override; defaults to the current locale.
    pub locale: Option<String>,

    /// Format family: `"date"`, `"time"`, or `"datetime"` (the default).
    pub kind: Option<String>,

    /// Named format within the family; defaults to `"default"`.
    pub format: Option<String>,
}

/// Translation lookup state: current locale and namespace, the nested
/// translation table, the key-normalization cache, and locale-change
/// observers.
///
/// A process-wide instance lives behind the [`crate::global`] facade; tests
/// and embedders needing isolation construct their own.
///
/// # Example
///
/// ```
/// use g11n::{Registry, TranslateOptions, values};
///
/// let mut registry = Registry::new();
/// registry.register_translations("app", "en", serde_json::json!({
///     "greeting": "Hello, %(name)s!",
/// }));
///
/// let text = registry
///     .translate(
///         "greeting",
///         TranslateOptions::builder()
///             .namespace("app")
///             .values(values! { "name" => "Alice" })
///             .build(),
///     )
///     .unwrap();
/// assert_eq!(text.to_string(), "Hello, Alice!");
/// ```
pub struct Registry {
    /// Current locale code (e.g. "en", "fr").
    locale: String,

    /// Current namespace; `translate` falls back to this when no override
    /// is given. `None` drops the namespace from lookup paths entirely.
    namespace: Option<String>,

    store: TranslationStore,
    keys: KeyCache,
    observers: LocaleObservers,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl Registry {
    /// Create a registry with the bundled `globalization`/`en` data
    /// pre-registered and `en` as the current locale.
    pub fn new() -> Self {
        let mut registry = Registry {
            locale: locales::DEFAULT_LOCALE.to_string(),
            namespace: Some(locales::DEFAULT_NAMESPACE.to_string()),
            store: TranslationStore::default(),
            keys: KeyCache::default(),
            observers: LocaleObservers::default(),
        };
        registry.register_translations(locales::DEFAULT_NAMESPACE, locales::DEFAULT_LOCALE, locales::en());
        registry
    }

    // =========================================================================
    // Locale / namespace context
    // =========================================================================

    /// Get the current locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Set the current locale, returning the previous one.
    ///
    /// Observers are notified synchronously, in registration order, only
    /// when the value actually changed.
    pub fn set_locale(&mut self, value: impl Into<String>) -> String {
        let value = value.into();
        let previous = self.locale.clone();
        if value != previous {
            self.locale = value;
            self.observers.notify(&self.locale, &previous);
        }
        previous
    }

    /// Get the current namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Register a locale-change observer. The listener receives
    /// `(new_locale, previous_locale)`.
    pub fn on_locale_change(
        &mut self,
        listener: impl Fn(&str, &str) + Send + Sync + 'static,
    ) -> ListenerId {
        self.observers.subscribe(listener)
    }

    /// Unregister a locale-change observer. Returns false if the handle was
    /// already removed.
    pub fn off_locale_change(&mut self, id: ListenerId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Run `f` with the locale temporarily overridden.
    ///
    /// The previous locale is restored on every exit path, including
    /// unwinding out of `f`. The override is applied directly, bypassing
    /// [`set_locale`](Registry::set_locale), so no change notification
    /// fires.
    pub fn with_locale<T>(
        &mut self,
        locale: impl Into<String>,
        f: impl FnOnce(&mut Registry) -> T,
    ) -> T {
        let previous = self.replace_locale(locale.into());
        let mut scope = RestoreOnDrop {
            registry: self,
            saved: Some(Saved::Locale(previous)),
        };
        f(&mut *scope.registry)
    }

    /// Run `f` with the namespace temporarily overridden; same restoration
    /// guarantee as [`with_locale`](Registry::with_locale). No change
    /// notification exists for namespaces.
    pub fn with_namespace<T>(
        &mut self,
        namespace: impl Into<String>,
        f: impl FnOnce(&mut Registry) -> T,
    ) -> T {
        let previous = self.replace_namespace(Some(namespace.into()));
        let mut scope = RestoreOnDrop {
            registry: self,
            saved: Some(Saved::Namespace(previous)),
        };
        f(&mut *scope.registry)
    }

    /// Swap the locale without notifying observers.
    pub(crate) fn replace_locale(&mut self, value: String) -> String {
        mem::replace(&mut self.locale, value)
    }

    /// Swap the namespace; no notification exists for namespaces.
    pub(crate) fn replace_namespace(&mut self, value: Option<String>) -> Option<String> {
        mem::replace(&mut self.namespace, value)
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Deep-merge translation data under `namespace`/`locale`.
    ///
    /// Existing unrelated keys are preserved at every nesting level; lists
    /// and leaves replace atomically. Registering identical data twice is
    /// idempotent.
    pub fn register_translations(&mut self, namespace: &str, locale: &str, data: impl Into<Entry>) {
        self.store.register(namespace, locale, data.into());
    }

    // =========================================================================
    // Lookup pipeline
    // =========================================================================

    /// Resolve `key` to a translation entry and run it through plural
    /// selection and interpolation.
    ///
    /// The lookup path is `namespace ++ locale ++ key`, each part
    /// normalized. An unresolved path yields `options.fallback` when
    /// supplied, otherwise the literal
    /// `"missing translation: <dot-joined path>"` marker.
    ///
    /// # Errors
    ///
    /// [`TranslateError::InvalidKey`] when `key` is the empty string or an
    /// empty segment array.
    pub fn translate(
        &mut self,
        key: impl Into<Key>,
        options: TranslateOptions,
    ) -> Result<Entry, TranslateError> {
        let key = key.into();
        if key.is_empty() {
            return Err(TranslateError::InvalidKey);
        }

        let TranslateOptions {
            namespace,
            locale,
            count,
            fallback,
            mut values,
        } = options;
        let namespace = namespace.or_else(|| self.namespace.clone());
        let locale = locale.unwrap_or_else(|| self.locale.clone());

        let mut path = self.keys.normalize_opt(namespace.as_deref());
        path.extend(self.keys.normalize_str(&locale));
        path.extend(self.keys.normalize(&key));

        let entry = match self.store.resolve(&path) {
            Some(entry) => entry.clone(),
            None => fallback
                .unwrap_or_else(|| Entry::Leaf(format!("missing translation: {}", path.join(".")))),
        };

        if let Some(count) = count {
            values
                .entry("count".to_string())
                .or_insert(Value::Number(count));
        }

        let entry = pluralize(entry, count);
        Ok(interpolate(entry, &values))
    }

    /// Format a date/time value using a format template and name bundle
    /// resolved from the translation table.
    ///
    /// The template comes from `formats.<kind>.<format>` and the month/day
    /// names from `names`, both under the options' namespace and locale.
    /// Anything missing from the resolved names falls back to English.
    ///
    /// # Errors
    ///
    /// Propagates [`TranslateError`] from the internal lookups; the lookup
    /// keys are fixed and non-empty, so this does not occur in practice.
    pub fn localize<D: Datelike + Timelike>(
        &mut self,
        date: &D,
        options: LocalizeOptions,
    ) -> Result<String, TranslateError> {
        let LocalizeOptions {
            namespace,
            locale,
            kind,
            format,
        } = options;
        let namespace = namespace.unwrap_or_else(|| locales::DEFAULT_NAMESPACE.to_string());
        let locale = locale.unwrap_or_else(|| self.locale.clone());
        let kind = kind.unwrap_or_else(|| "datetime".to_string());
        let format = format.unwrap_or_else(|| "default".to_string());

        let template = self
            .translate(
                ["formats", kind.as_str(), format.as_str()],
                TranslateOptions::builder()
                    .namespace(namespace.clone())
                    .locale(locale.clone())
                    .build(),
            )?
            .to_string();

        let names_entry = self.translate(
            "names",
            TranslateOptions::builder()
                .namespace(namespace)
                .locale(locale)
                .build(),
        )?;
        let names = Names::from_entry(&names_entry);

        Ok(formatter::format_date(date, &template, &names))
    }
}

enum Saved {
    Locale(String),
    Namespace(Option<String>),
}

/// Restores an overridden context field when the scope ends, on every exit
/// path including unwinding.
struct RestoreOnDrop<'a> {
    registry: &'a mut Registry,
    saved: Option<Saved>,
}

impl Drop for RestoreOnDrop<'_> {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(Saved::Locale(previous)) => self.registry.locale = previous,
            Some(Saved::Namespace(previous)) => self.registry.namespace = previous,
            None => {}
        }
    }
}
