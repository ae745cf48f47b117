//! Key-path normalization with per-registry memoization.

use std::collections::HashMap;

use crate::types::Key;

/// Splits dotted key paths into flat segment sequences, caching the result
/// for each distinct raw string.
///
/// The cache is unbounded and never evicted; translation keys are a small,
/// closed set in practice, and each registry instance owns its own cache so
/// nothing leaks across instances.
#[derive(Debug, Default)]
pub(crate) struct KeyCache {
    normalized: HashMap<String, Vec<String>>,
}

impl KeyCache {
    /// Normalize either raw key form into an ordered segment sequence.
    ///
    /// Array elements are normalized independently and concatenated in
    /// order, flattening dotted elements exactly as the string form would.
    pub fn normalize(&mut self, key: &Key) -> Vec<String> {
        match key {
            Key::Path(path) => self.normalize_str(path),
            Key::Segments(parts) => {
                let mut segments = Vec::with_capacity(parts.len());
                for part in parts {
                    segments.extend(self.normalize_str(part));
                }
                segments
            }
        }
    }

    /// Normalize a dotted string: split on `.` and drop empty fragments.
    pub fn normalize_str(&mut self, raw: &str) -> Vec<String> {
        if let Some(hit) = self.normalized.get(raw) {
            return hit.clone();
        }
        let segments: Vec<String> = raw
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        self.normalized.insert(raw.to_string(), segments.clone());
        segments
    }

    /// An absent value (no current namespace) normalizes to no segments.
    pub fn normalize_opt(&mut self, raw: Option<&str>) -> Vec<String> {
        match raw {
            Some(raw) => self.normalize_str(raw),
            None => Vec::new(),
        }
    }
}
