use std::fmt;

use crate::{private, DirectoryPath, FilePath, Syntax};

/// [`FilePath`] using Windows path syntax
pub type WindowsFilePath = FilePath<WindowsSyntax>;

/// [`DirectoryPath`] using Windows path syntax
pub type WindowsDirectoryPath = DirectoryPath<WindowsSyntax>;

/// Contains constants associated with Windows path syntax.
pub mod windows_constants {
    /// The separators of path segments accepted on Windows platforms
    pub const SEPARATORS: [char; 2] = ['/', '\\'];

    /// The separator emitted when rendering; Windows APIs accept `/` as well
    /// as `\`, and the original flavor of this crate always renders `/`
    pub const SEPARATOR: char = '/';

    /// The emitted separator as a string
    pub const SEPARATOR_STR: &str = "/";
}

/// Drive-letter path syntax: segments are separated by `/` or `\`, an
/// absolute path carries a `<letter>:` drive marker, and that marker is kept
/// as a reserved first segment which `..` can never pop.
///
/// Comparison stays case-sensitive even though Windows filesystems usually
/// are not; two spellings differing in case are distinct paths by policy.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct WindowsSyntax;

impl private::Sealed for WindowsSyntax {}

impl Syntax for WindowsSyntax {
    const SEPARATORS: &'static [char] = &windows_constants::SEPARATORS;
    const SEPARATOR: char = windows_constants::SEPARATOR;
    const SEPARATOR_STR: &'static str = windows_constants::SEPARATOR_STR;
    const RESERVED: usize = 1;

    #[inline]
    fn is_absolute(raw: &str) -> bool {
        raw.as_bytes().get(1) == Some(&b':')
    }
}

impl fmt::Debug for WindowsSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowsSyntax").finish()
    }
}

impl fmt::Display for WindowsSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowsSyntax")
    }
}
