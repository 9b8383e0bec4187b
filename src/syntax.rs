use std::fmt;

use crate::private;

/// Path syntax policy injected into every path type as a type parameter.
///
/// A syntax supplies the three things that differ between path flavors: the
/// set of separator characters accepted on input, the rule deciding whether a
/// raw string is absolute, and the length of the reserved prefix (the leading
/// segments that encode the volume and can never be removed).
///
/// The two implementations are [`UnixSyntax`](crate::UnixSyntax) and
/// [`WindowsSyntax`](crate::WindowsSyntax); [`NativeSyntax`](crate::NativeSyntax)
/// aliases whichever matches the compilation platform. This trait is sealed
/// and cannot be implemented outside of this crate.
pub trait Syntax: Copy + Clone + fmt::Debug + private::Sealed + 'static {
    /// Separator characters recognized when parsing raw input
    const SEPARATORS: &'static [char];

    /// Separator emitted when rendering a path back to a string
    const SEPARATOR: char;

    /// [`Self::SEPARATOR`] as a string slice, for joining
    const SEPARATOR_STR: &'static str;

    /// Number of leading segments that encode the volume; they are never
    /// popped by `..` resolution or by exiting a directory
    const RESERVED: usize;

    /// Returns true if the raw string satisfies this syntax's absolute-prefix rule
    fn is_absolute(raw: &str) -> bool;
}
