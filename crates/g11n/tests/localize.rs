//! Integration tests for locale-aware date/time formatting.

use chrono::{NaiveDate, NaiveDateTime};
use g11n::{LocalizeOptions, Registry};
use pretty_assertions::assert_eq;

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 3, 1)
        .unwrap()
        .and_hms_opt(9, 5, 9)
        .unwrap()
}

#[test]
fn default_options_use_the_datetime_default_format() {
    let mut registry = Registry::new();
    let formatted = registry.localize(&morning(), LocalizeOptions::default()).unwrap();
    assert_eq!(formatted, "Wed,  1 Mar 2017 09:05");
}

#[test]
fn kind_and_format_select_the_template() {
    let mut registry = Registry::new();

    let date = registry
        .localize(
            &morning(),
            LocalizeOptions::builder().kind("date").format("short").build(),
        )
        .unwrap();
    assert_eq!(date, "Mar  1");

    let time = registry
        .localize(
            &morning(),
            LocalizeOptions::builder().kind("time").format("long").build(),
        )
        .unwrap();
    assert_eq!(time, "09:05:09");
}

#[test]
fn long_formats_spell_out_names_and_ordinals() {
    let mut registry = Registry::new();
    let formatted = registry
        .localize(
            &morning(),
            LocalizeOptions::builder().kind("date").format("long").build(),
        )
        .unwrap();
    assert_eq!(formatted, "Wednesday, March 1st, 2017");
}

#[test]
fn registered_templates_reach_the_formatter() {
    let mut registry = Registry::new();
    registry.register_translations(
        "globalization",
        "xx",
        serde_json::json!({ "formats": { "date": { "short": "%Y/%m/%d" } } }),
    );

    let formatted = registry
        .localize(
            &morning(),
            LocalizeOptions::builder()
                .locale("xx")
                .kind("date")
                .format("short")
                .build(),
        )
        .unwrap();
    assert_eq!(formatted, "2017/03/01");
}

#[test]
fn registered_names_localize_the_output() {
    let mut registry = Registry::new();
    registry.register_translations(
        "globalization",
        "fr",
        serde_json::json!({
            "formats": { "date": { "short": "%e %B %Y" } },
            "names": {
                "months": [
                    "janvier", "février", "mars", "avril", "mai", "juin",
                    "juillet", "août", "septembre", "octobre", "novembre", "décembre"
                ]
            }
        }),
    );

    registry.set_locale("fr");
    let formatted = registry
        .localize(
            &morning(),
            LocalizeOptions::builder().kind("date").format("short").build(),
        )
        .unwrap();
    assert_eq!(formatted, " 1 mars 2017");
}

#[test]
fn current_namespace_does_not_affect_localization() {
    let mut registry = Registry::new();
    let formatted = registry.with_namespace("app", |registry| {
        registry.localize(&morning(), LocalizeOptions::default()).unwrap()
    });
    assert_eq!(formatted, "Wed,  1 Mar 2017 09:05");
}
