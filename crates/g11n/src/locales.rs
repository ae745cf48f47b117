//! Bundled default translation data.
//!
//! One namespace/locale pair ships with the crate and is registered by
//! [`Registry::new`](crate::Registry::new): the `formats` templates and
//! `names` bundle the date/time localizer needs for English output.

use crate::types::Entry;

pub(crate) const DEFAULT_NAMESPACE: &str = "globalization";
pub(crate) const DEFAULT_LOCALE: &str = "en";

pub(crate) fn en() -> Entry {
    Entry::from(serde_json::json!({
        "names": {
            "days": [
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"
            ],
            "abbreviated_days": ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            "months": [
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December"
            ],
            "abbreviated_months": [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun",
                "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
            ],
            "am": "am",
            "pm": "pm"
        },
        "formats": {
            "date": {
                "default": "%a, %e %b %Y",
                "long": "%A, %B %o, %Y",
                "short": "%b %e"
            },
            "time": {
                "default": "%H:%M",
                "long": "%H:%M:%S",
                "short": "%H:%M"
            },
            "datetime": {
                "default": "%a, %e %b %Y %H:%M",
                "long": "%A, %B %o, %Y %H:%M",
                "short": "%b %e %H:%M"
            }
        }
    }))
}
