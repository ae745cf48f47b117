/// A translation key supplied by the caller.
///
/// Keys come in two raw forms: a single dotted path (`"errors.not_found"`)
/// or an array of segments where each element may itself be dotted
/// (`["errors", "not_found.title"]`). Both normalize to the same flat
/// segment sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A dotted path string.
    Path(String),

    /// An ordered list of (possibly dotted) segments, flattened in order.
    Segments(Vec<String>),
}

impl Key {
    /// True for the raw inputs `translate` rejects: the empty string and the
    /// empty array.
    pub fn is_empty(&self) -> bool {
        match self {
            Key::Path(path) => path.is_empty(),
            Key::Segments(segments) => segments.is_empty(),
        }
    }
}

impl From<&str> for Key {
    fn from(path: &str) -> Self {
        Key::Path(path.to_string())
    }
}

impl From<String> for Key {
    fn from(path: String) -> Self {
        Key::Path(path)
    }
}

impl From<Vec<String>> for Key {
    fn from(segments: Vec<String>) -> Self {
        Key::Segments(segments)
    }
}

impl From<Vec<&str>> for Key {
    fn from(segments: Vec<&str>) -> Self {
        Key::Segments(segments.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Key {
    fn from(segments: &[&str]) -> Self {
        Key::Segments(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Key {
    fn from(segments: [&str; N]) -> Self {
        Key::Segments(segments.iter().map(|s| (*s).to_string()).collect())
    }
}
