use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::{parser, Absolute, DirectoryPath, Error, Result, Segment, Syntax};

/// An absolute path naming a file: at least one segment beyond the reserved
/// prefix, of which the last is the file name and the rest are its parent
/// directory.
///
/// A `FilePath` is immutable once constructed. Cloning copies the segment
/// sequence; nothing is shared between clones.
pub struct FilePath<S: Syntax> {
    pub(crate) segments: Vec<Segment>,
    _syntax: PhantomData<S>,
}

impl<S: Syntax> FilePath<S> {
    /// Parses and normalizes a raw absolute string into a file path.
    ///
    /// Fails with the `InvalidPath` family of [`Error`]s on empty input,
    /// input that is not absolute under `S`, a `..` stepping above the root,
    /// or input that normalizes to the root and therefore names no file.
    pub fn from_absolute(raw: &str) -> Result<Self> {
        let segments = parser::parse_absolute::<S>(raw)?;
        if segments.len() <= S::RESERVED {
            return Err(Error::NoFileName(raw.to_string()));
        }
        Ok(Self::from_segments(segments))
    }

    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(segments.len() > S::RESERVED);
        Self {
            segments,
            _syntax: PhantomData,
        }
    }

    /// The file name, i.e. the last segment
    pub fn file(&self) -> &Segment {
        // Invariant: at least one segment beyond the reserved prefix
        self.segments.last().unwrap()
    }

    /// The directory containing the file, i.e. everything but the last segment
    pub fn directory(&self) -> DirectoryPath<S> {
        DirectoryPath::from_segments(self.segments[..self.segments.len() - 1].to_vec())
    }
}

#[cfg(any(unix, windows))]
impl crate::NativeFilePath {
    /// Builds a file path from a raw string that may be relative, resolving
    /// it against the working directory.
    ///
    /// Failure to obtain the working directory is a system error; everything
    /// else fails the same way as [`FilePath::from_absolute`].
    pub fn qualify(raw: &str) -> Result<Self> {
        if crate::NativeSyntax::is_absolute(raw) {
            return Self::from_absolute(raw);
        }

        let mut combined = crate::locate::working_directory()?.as_absolute_string();
        combined.push(crate::NativeSyntax::SEPARATOR);
        combined.push_str(raw);
        Self::from_absolute(&combined)
    }

    /// Returns true if something exists at this path
    pub fn exists(&self) -> bool {
        std::fs::metadata(self.as_absolute_string()).is_ok()
    }

    /// Opens the file for reading
    pub fn open(&self) -> Result<std::fs::File> {
        Ok(std::fs::File::open(self.as_absolute_string())?)
    }

    /// Creates (or truncates) the file and opens it for writing
    pub fn create(&self) -> Result<std::fs::File> {
        Ok(std::fs::File::create(self.as_absolute_string())?)
    }

    /// Opens the file for appending, creating it if absent
    pub fn append(&self) -> Result<std::fs::File> {
        Ok(std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.as_absolute_string())?)
    }

    /// Deletes the file
    pub fn remove(&self) -> Result<()> {
        Ok(std::fs::remove_file(self.as_absolute_string())?)
    }
}

impl<S: Syntax> crate::private::Sealed for FilePath<S> {}

impl<S: Syntax> Absolute<S> for FilePath<S> {
    #[inline]
    fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl<S: Syntax> Clone for FilePath<S> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            _syntax: PhantomData,
        }
    }
}

impl<S: Syntax> fmt::Debug for FilePath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FilePath")
            .field(&self.as_absolute_string())
            .finish()
    }
}

impl<S: Syntax> fmt::Display for FilePath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_absolute_string(), f)
    }
}

impl<S: Syntax> cmp::PartialEq for FilePath<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl<S: Syntax> cmp::Eq for FilePath<S> {}

impl<S: Syntax> cmp::PartialOrd for FilePath<S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Syntax> cmp::Ord for FilePath<S> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.segments.cmp(&other.segments)
    }
}

impl<S: Syntax> Hash for FilePath<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}
