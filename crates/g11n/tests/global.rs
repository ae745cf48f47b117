//! Integration test for the process-wide registry facade.
//!
//! The facade shares one registry across the whole process, so everything
//! is exercised from a single test to keep the observable state sequential.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use g11n::{LocalizeOptions, TranslateOptions};
use pretty_assertions::assert_eq;

#[test]
fn global_facade_round_trip() {
    g11n::register_translations("app", "en", serde_json::json!({ "hello": "Hello" }));
    g11n::register_translations("app", "de", serde_json::json!({ "hello": "Hallo" }));

    assert_eq!(g11n::locale(), "en");
    let entry = g11n::translate("hello", TranslateOptions::builder().namespace("app").build());
    assert_eq!(entry.unwrap().to_string(), "Hello");

    // locale change notification fires once per genuine change
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let id = g11n::on_locale_change(move |new_locale, previous_locale| {
        sink.lock()
            .unwrap()
            .push((new_locale.to_string(), previous_locale.to_string()));
    });

    assert_eq!(g11n::set_locale("fr"), "en");
    assert_eq!(g11n::set_locale("fr"), "fr");
    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[("fr".to_string(), "en".to_string())]
    );

    // scoped overrides are visible inside, restored after, and silent
    let inside = g11n::with_locale("de", || {
        let entry = g11n::translate("hello", TranslateOptions::builder().namespace("app").build());
        (g11n::locale(), entry.unwrap().to_string())
    });
    assert_eq!(inside, ("de".to_string(), "Hallo".to_string()));
    assert_eq!(g11n::locale(), "fr");
    assert_eq!(events.lock().unwrap().len(), 1);

    let entry = g11n::with_namespace("app", || {
        g11n::translate("hello", TranslateOptions::builder().locale("en").build())
    });
    assert_eq!(entry.unwrap().to_string(), "Hello");

    // unsubscription
    assert!(g11n::off_locale_change(id));
    assert!(!g11n::off_locale_change(id));
    g11n::set_locale("en");
    assert_eq!(events.lock().unwrap().len(), 1);

    // localization against the bundled data
    let date = NaiveDate::from_ymd_opt(2017, 3, 1)
        .unwrap()
        .and_hms_opt(9, 5, 0)
        .unwrap();
    let formatted = g11n::localize(&date, LocalizeOptions::default()).unwrap();
    assert_eq!(formatted, "Wed,  1 Mar 2017 09:05");
}
