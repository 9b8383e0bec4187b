//! Error types for the crate.
//!
//! Path construction fails synchronously at parse time; filesystem and
//! environment lookups surface the underlying [`std::io::Error`]. A directory
//! that cannot be listed during a walk is deliberately *not* an error — it
//! degrades to an empty listing (see [`Listing`](crate::Listing)).

use thiserror::Error;

/// Result type alias for operations that may fail with a path error.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for path construction and location lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// The raw input string was empty.
    #[error("absolute paths must not be empty")]
    Empty,

    /// The raw input string did not satisfy the syntax's absolute-prefix rule.
    #[error("`{0}` is not an absolute path")]
    NotAbsolute(String),

    /// A `..` component attempted to step above the root (or above the
    /// reserved drive segment on drive-letter syntaxes).
    #[error("`{0}` steps above the filesystem root")]
    RootEscape(String),

    /// The input named the root, so there is no file segment.
    #[error("`{0}` does not name a file")]
    NoFileName(String),

    /// The user's home directory could not be determined.
    #[error("user home directory is undefined")]
    HomeNotFound,

    /// A required environment variable was not set.
    #[error("environment variable `{0}` is undefined")]
    UndefinedVariable(&'static str),

    /// An underlying OS call failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error was raised while parsing a raw path string,
    /// as opposed to a failed OS call.
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::NotAbsolute(_) | Self::RootEscape(_) | Self::NoFileName(_)
        )
    }
}
