use std::borrow::Borrow;
use std::fmt;

use crate::Syntax;

/// One normalized path component.
///
/// A segment is never empty, never `.` or `..`, and never contains a
/// separator character. Segments only come out of path construction and
/// directory listings, both of which uphold those rules.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment(String);

impl Segment {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty() && name != "." && name != "..");
        Self(name)
    }

    /// View of the segment as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the segment, returning the underlying string
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Returns true if `name` may be used verbatim as a segment under syntax `S`.
pub(crate) fn is_clean<S: Syntax>(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(S::SEPARATORS)
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Segment {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Segment {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Segment {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Segment {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Segment> for String {
    #[inline]
    fn from(segment: Segment) -> Self {
        segment.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UnixSyntax, WindowsSyntax};

    #[test]
    fn should_accept_ordinary_names() {
        assert!(is_clean::<UnixSyntax>("archive"));
        assert!(is_clean::<UnixSyntax>("notes.txt"));
        assert!(is_clean::<UnixSyntax>("..hidden"));
        assert!(is_clean::<WindowsSyntax>("notes.txt"));
    }

    #[test]
    fn should_reject_special_and_separator_carrying_names() {
        assert!(!is_clean::<UnixSyntax>(""));
        assert!(!is_clean::<UnixSyntax>("."));
        assert!(!is_clean::<UnixSyntax>(".."));
        assert!(!is_clean::<UnixSyntax>("a/b"));

        // Backslash is a separator only under Windows syntax
        assert!(is_clean::<UnixSyntax>("a\\b"));
        assert!(!is_clean::<WindowsSyntax>("a\\b"));
        assert!(!is_clean::<WindowsSyntax>("a/b"));
    }
}
