//! Dot-separated symbol paths.
//!
//! A symbol such as `user.profile.name` is split once at parse time so the
//! evaluator can walk the segments without re-scanning the text on every run.

use std::fmt;

/// A symbol path: the full text plus its dot-separated segments.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SymbolPath {
    text: Box<str>,
    segments: Box<[Box<str>]>,
}

impl SymbolPath {
    /// Split `text` on `.` into segments.
    ///
    /// Empty segments (from `a..b` or a trailing dot) are kept; they simply
    /// never match a context key.
    pub fn parse(text: &str) -> Self {
        SymbolPath {
            text: text.into(),
            segments: text.split('.').map(Into::into).collect(),
        }
    }

    /// The path as written in the source.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The path segments, outermost first.
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(AsRef::as_ref)
    }

    /// Number of segments.
    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Debug for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolPath({})", self.text)
    }
}

impl fmt::Display for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_segment() {
        let path = SymbolPath::parse("foo");
        assert_eq!(path.depth(), 1);
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["foo"]);
    }

    #[test]
    fn test_nested_segments() {
        let path = SymbolPath::parse("user.profile.name");
        assert_eq!(path.as_str(), "user.profile.name");
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            vec!["user", "profile", "name"]
        );
    }

    #[test]
    fn test_trailing_dot_keeps_empty_segment() {
        let path = SymbolPath::parse("a.");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", ""]);
    }
}
