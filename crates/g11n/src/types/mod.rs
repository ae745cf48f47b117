//! Core value types for translation lookup.

mod entry;
mod key;
mod value;

pub use entry::{Entry, PluralForms};
pub use key::Key;
pub use value::Value;
