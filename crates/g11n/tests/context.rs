//! Integration tests for locale/namespace context switching and change
//! notification.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex};

use g11n::{Registry, TranslateOptions};
use pretty_assertions::assert_eq;

type Events = Arc<Mutex<Vec<(String, String)>>>;

fn recording_listener(registry: &mut Registry) -> Events {
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    registry.on_locale_change(move |new_locale, previous_locale| {
        sink.lock()
            .unwrap()
            .push((new_locale.to_string(), previous_locale.to_string()));
    });
    events
}

// =========================================================================
// set_locale and notification
// =========================================================================

#[test]
fn set_locale_returns_the_previous_value() {
    let mut registry = Registry::new();
    assert_eq!(registry.set_locale("fr"), "en");
    assert_eq!(registry.locale(), "fr");
    assert_eq!(registry.set_locale("fr"), "fr");
}

#[test]
fn notification_fires_once_per_genuine_change() {
    let mut registry = Registry::new();
    let events = recording_listener(&mut registry);

    registry.set_locale("fr");
    registry.set_locale("fr");

    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[("fr".to_string(), "en".to_string())]
    );
}

#[test]
fn listeners_run_in_registration_order() {
    let mut registry = Registry::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&order);
    registry.on_locale_change(move |_, _| first.lock().unwrap().push("first"));
    let second = Arc::clone(&order);
    registry.on_locale_change(move |_, _| second.lock().unwrap().push("second"));

    registry.set_locale("fr");
    assert_eq!(order.lock().unwrap().as_slice(), &["first", "second"]);
}

#[test]
fn unsubscribed_listeners_are_not_called() {
    let mut registry = Registry::new();
    let events = recording_listener(&mut registry);

    registry.set_locale("fr");
    let events_before = events.lock().unwrap().len();

    let id = registry.on_locale_change(|_, _| {});
    assert!(registry.off_locale_change(id));
    assert!(!registry.off_locale_change(id));

    registry.set_locale("de");
    assert_eq!(events.lock().unwrap().len(), events_before + 1);
}

// =========================================================================
// Scoped overrides
// =========================================================================

#[test]
fn with_locale_overrides_and_restores() {
    let mut registry = Registry::new();

    let seen = registry.with_locale("fr", |registry| registry.locale().to_string());
    assert_eq!(seen, "fr");
    assert_eq!(registry.locale(), "en");
}

#[test]
fn with_locale_restores_after_a_panic() {
    let mut registry = Registry::new();

    let result = catch_unwind(AssertUnwindSafe(|| {
        registry.with_locale("fr", |_| panic!("boom"));
    }));

    assert!(result.is_err());
    assert_eq!(registry.locale(), "en");
}

#[test]
fn with_locale_does_not_notify() {
    let mut registry = Registry::new();
    let events = recording_listener(&mut registry);

    registry.with_locale("fr", |_| ());
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn nested_overrides_unwind_in_order() {
    let mut registry = Registry::new();

    registry.with_locale("fr", |registry| {
        registry.with_locale("de", |registry| {
            assert_eq!(registry.locale(), "de");
        });
        assert_eq!(registry.locale(), "fr");
    });
    assert_eq!(registry.locale(), "en");
}

#[test]
fn with_namespace_scopes_translation_lookup() {
    let mut registry = Registry::new();
    registry.register_translations("app", "en", serde_json::json!({ "hello": "Hello" }));

    let entry = registry.with_namespace("app", |registry| {
        registry.translate("hello", TranslateOptions::default()).unwrap()
    });
    assert_eq!(entry.to_string(), "Hello");

    // outside the scope the default namespace applies again
    let entry = registry.translate("hello", TranslateOptions::default()).unwrap();
    assert_eq!(entry.to_string(), "missing translation: globalization.en.hello");
    assert_eq!(registry.namespace(), Some("globalization"));
}

#[test]
fn with_namespace_restores_after_a_panic() {
    let mut registry = Registry::new();

    let result = catch_unwind(AssertUnwindSafe(|| {
        registry.with_namespace("app", |_| panic!("boom"));
    }));

    assert!(result.is_err());
    assert_eq!(registry.namespace(), Some("globalization"));
}

#[test]
fn scoped_locale_changes_translation_results() {
    let mut registry = Registry::new();
    registry.register_translations("app", "en", serde_json::json!({ "hello": "Hello" }));
    registry.register_translations("app", "fr", serde_json::json!({ "hello": "Bonjour" }));

    let options = || TranslateOptions::builder().namespace("app").build();
    let english = registry.translate("hello", options()).unwrap();
    let french = registry.with_locale("fr", |registry| registry.translate("hello", options()).unwrap());

    assert_eq!(english.to_string(), "Hello");
    assert_eq!(french.to_string(), "Bonjour");
}
