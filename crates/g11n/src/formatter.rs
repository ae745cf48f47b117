//! Low-level date/time token formatting.
//!
//! Walks a strftime-style template character by character, emitting
//! localized month/day names from a [`Names`] bundle. The bundle is
//! resolved from the translation table by
//! [`localize`](crate::Registry::localize); anything missing falls back to
//! the English defaults.

use chrono::{Datelike, Timelike};
use serde::Deserialize;

use crate::types::Entry;

/// Localized names consumed by the token formatter.
///
/// Day arrays start at Sunday; month arrays at January.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Names {
    pub days: Vec<String>,
    pub abbreviated_days: Vec<String>,
    pub months: Vec<String>,
    pub abbreviated_months: Vec<String>,
    pub am: String,
    pub pm: String,
}

impl Default for Names {
    fn default() -> Self {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|name| (*name).to_string()).collect()
        }

        Names {
            days: owned(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            abbreviated_days: owned(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            months: owned(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            abbreviated_months: owned(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            am: "am".to_string(),
            pm: "pm".to_string(),
        }
    }
}

impl Names {
    /// Build a names bundle from a resolved translation entry.
    ///
    /// The entry's structure is whatever was registered under `names`;
    /// fields that are absent or ill-shaped take their English defaults.
    pub fn from_entry(entry: &Entry) -> Names {
        serde_json::to_value(entry)
            .ok()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    fn day(&self, index: usize) -> &str {
        name_at(&self.days, index)
    }

    fn abbreviated_day(&self, index: usize) -> &str {
        name_at(&self.abbreviated_days, index)
    }

    fn month(&self, index: usize) -> &str {
        name_at(&self.months, index)
    }

    fn abbreviated_month(&self, index: usize) -> &str {
        name_at(&self.abbreviated_months, index)
    }
}

fn name_at(names: &[String], index: usize) -> &str {
    names.get(index).map(String::as_str).unwrap_or("")
}

/// Format `date` according to a strftime-style template.
///
/// Supported tokens: `%a %A %b %B %d %e %H %I %l %m %M %o %p %S %y %Y %%`.
/// Unknown tokens pass through verbatim.
pub fn format_date<D: Datelike + Timelike>(date: &D, template: &str, names: &Names) -> String {
    let weekday = date.weekday().num_days_from_sunday() as usize;
    let month = date.month().saturating_sub(1) as usize;
    let (is_pm, hour12) = date.hour12();

    let mut out = String::with_capacity(template.len());
    let mut tokens = template.chars();
    while let Some(ch) = tokens.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match tokens.next() {
            Some('a') => out.push_str(names.abbreviated_day(weekday)),
            Some('A') => out.push_str(names.day(weekday)),
            Some('b') => out.push_str(names.abbreviated_month(month)),
            Some('B') => out.push_str(names.month(month)),
            Some('d') => out.push_str(&format!("{:02}", date.day())),
            Some('e') => out.push_str(&format!("{:>2}", date.day())),
            Some('H') => out.push_str(&format!("{:02}", date.hour())),
            Some('I') => out.push_str(&format!("{hour12:02}")),
            Some('l') => out.push_str(&format!("{hour12:>2}")),
            Some('m') => out.push_str(&format!("{:02}", date.month())),
            Some('M') => out.push_str(&format!("{:02}", date.minute())),
            Some('o') => out.push_str(&ordinal(date.day())),
            Some('p') => out.push_str(if is_pm { &names.pm } else { &names.am }),
            Some('S') => out.push_str(&format!("{:02}", date.second())),
            Some('y') => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            Some('Y') => out.push_str(&date.year().to_string()),
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}

/// English ordinal form of a day number: 1st, 2nd, 3rd, 4th, 11th, 21st…
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
