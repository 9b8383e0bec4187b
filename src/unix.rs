use std::fmt;

use crate::{private, DirectoryPath, FilePath, Syntax};

/// [`FilePath`] using Unix path syntax
pub type UnixFilePath = FilePath<UnixSyntax>;

/// [`DirectoryPath`] using Unix path syntax
pub type UnixDirectoryPath = DirectoryPath<UnixSyntax>;

/// Contains constants associated with Unix path syntax.
pub mod unix_constants {
    /// The separator of path segments on Unix platforms
    pub const SEPARATOR: char = '/';

    /// The separator of path segments on Unix platforms, as a string
    pub const SEPARATOR_STR: &str = "/";
}

/// Root-relative path syntax: segments are separated by `/`, an absolute path
/// starts with `/`, and the root is the empty segment sequence.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct UnixSyntax;

impl private::Sealed for UnixSyntax {}

impl Syntax for UnixSyntax {
    const SEPARATORS: &'static [char] = &[unix_constants::SEPARATOR];
    const SEPARATOR: char = unix_constants::SEPARATOR;
    const SEPARATOR_STR: &'static str = unix_constants::SEPARATOR_STR;
    const RESERVED: usize = 0;

    #[inline]
    fn is_absolute(raw: &str) -> bool {
        raw.starts_with(unix_constants::SEPARATOR)
    }
}

impl fmt::Debug for UnixSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnixSyntax").finish()
    }
}

impl fmt::Display for UnixSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnixSyntax")
    }
}
