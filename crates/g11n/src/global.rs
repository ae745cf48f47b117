//! The process-wide default registry.
//!
//! Provides thread-safe access to a shared [`Registry`] instance so
//! applications can translate and localize without passing a registry
//! around. Tests and embedders needing isolation should construct their own
//! [`Registry`] instead.
//!
//! The current locale and namespace here are process-global, not task-local:
//! logically concurrent callers that overlap inside
//! [`with_locale`]/[`with_namespace`] scopes will observe each other's
//! overrides. Callers needing per-task context must carry their own
//! `Registry`.

use std::sync::{LazyLock, PoisonError, RwLock};

use chrono::{Datelike, Timelike};

use crate::error::TranslateError;
use crate::registry::{ListenerId, LocalizeOptions, Registry, TranslateOptions};
use crate::types::{Entry, Key};

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Provides read access to the global registry.
pub fn with_registry<T>(f: impl FnOnce(&Registry) -> T) -> T {
    let guard = REGISTRY.read().expect("global registry lock poisoned");
    f(&guard)
}

/// Provides write access to the global registry.
pub fn with_registry_mut<T>(f: impl FnOnce(&mut Registry) -> T) -> T {
    let mut guard = REGISTRY.write().expect("global registry lock poisoned");
    f(&mut guard)
}

/// Returns the current locale of the global registry.
pub fn locale() -> String {
    with_registry(|registry| registry.locale().to_owned())
}

/// Sets the current locale, returning the previous one. Fires the
/// locale-change notification when the value actually changed.
pub fn set_locale(value: impl Into<String>) -> String {
    with_registry_mut(|registry| registry.set_locale(value))
}

/// Deep-merges translation data into the global registry.
pub fn register_translations(namespace: &str, locale: &str, data: impl Into<Entry>) {
    with_registry_mut(|registry| registry.register_translations(namespace, locale, data));
}

/// Translates `key` against the global registry.
///
/// # Errors
///
/// [`TranslateError::InvalidKey`] when `key` is empty.
pub fn translate(key: impl Into<Key>, options: TranslateOptions) -> Result<Entry, TranslateError> {
    with_registry_mut(|registry| registry.translate(key, options))
}

/// Formats a date/time value against the global registry.
///
/// # Errors
///
/// Propagates [`TranslateError`] from the internal lookups.
pub fn localize<D: Datelike + Timelike>(
    date: &D,
    options: LocalizeOptions,
) -> Result<String, TranslateError> {
    with_registry_mut(|registry| registry.localize(date, options))
}

/// Registers a locale-change listener on the global registry.
pub fn on_locale_change(listener: impl Fn(&str, &str) + Send + Sync + 'static) -> ListenerId {
    with_registry_mut(|registry| registry.on_locale_change(listener))
}

/// Removes a locale-change listener from the global registry.
pub fn off_locale_change(id: ListenerId) -> bool {
    with_registry_mut(|registry| registry.off_locale_change(id))
}

/// Runs `f` with the global locale temporarily overridden.
///
/// The previous locale is restored on every exit path, including unwinding
/// out of `f`. The override bypasses [`set_locale`], so no change
/// notification fires.
pub fn with_locale<T>(locale: impl Into<String>, f: impl FnOnce() -> T) -> T {
    let _scope = ScopedOverride::locale(locale.into());
    f()
}

/// Runs `f` with the global namespace temporarily overridden; same
/// restoration guarantee as [`with_locale`].
pub fn with_namespace<T>(namespace: impl Into<String>, f: impl FnOnce() -> T) -> T {
    let _scope = ScopedOverride::namespace(namespace.into());
    f()
}

enum Saved {
    Locale(String),
    Namespace(Option<String>),
}

/// Restores the overridden global field on drop. Runs during unwinding too,
/// so the lock is recovered from poisoning instead of panicking again.
struct ScopedOverride(Option<Saved>);

impl ScopedOverride {
    fn locale(value: String) -> Self {
        let previous = with_registry_mut(|registry| registry.replace_locale(value));
        ScopedOverride(Some(Saved::Locale(previous)))
    }

    fn namespace(value: String) -> Self {
        let previous = with_registry_mut(|registry| registry.replace_namespace(Some(value)));
        ScopedOverride(Some(Saved::Namespace(previous)))
    }
}

impl Drop for ScopedOverride {
    fn drop(&mut self) {
        let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
        match self.0.take() {
            Some(Saved::Locale(previous)) => {
                registry.replace_locale(previous);
            }
            Some(Saved::Namespace(previous)) => {
                registry.replace_namespace(previous);
            }
            None => {}
        }
    }
}
