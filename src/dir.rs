use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::{
    parser, path, segment, walk, Absolute, FilePath, Listing, OsListing, Result, Segment, Syntax,
};

/// An absolute path naming a directory, of any depth including the root.
///
/// Unlike [`FilePath`], a `DirectoryPath` doubles as a navigation cursor:
/// [`enter`](Self::enter) and [`exit`](Self::exit) move it down and up the
/// tree in place. The cursor semantics exist for the walker; callers that
/// need a stable value must clone before mutating, which copies the segment
/// sequence outright (nothing is shared between clones).
pub struct DirectoryPath<S: Syntax> {
    pub(crate) segments: Vec<Segment>,
    _syntax: PhantomData<S>,
}

impl<S: Syntax> DirectoryPath<S> {
    /// Parses and normalizes a raw absolute string into a directory path.
    ///
    /// Fails with the `InvalidPath` family of [`Error`](crate::Error)s on
    /// empty input, input that is not absolute under `S`, or a `..` stepping
    /// above the root.
    pub fn from_absolute(raw: &str) -> Result<Self> {
        Ok(Self::from_segments(parser::parse_absolute::<S>(raw)?))
    }

    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            _syntax: PhantomData,
        }
    }

    /// Moves the cursor down into the child directory `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty, is `.` or `..`, or contains a separator.
    pub fn enter(&mut self, name: &str) -> &mut Self {
        assert!(
            segment::is_clean::<S>(name),
            "`{name}` is not a valid directory name"
        );
        self.segments.push(Segment::new(name));
        self
    }

    /// Moves the cursor up one level, undoing the most recent
    /// [`enter`](Self::enter).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the root.
    pub fn exit(&mut self) -> &mut Self {
        assert!(!self.is_root(), "cannot exit the filesystem root");
        self.segments.pop();
        self
    }

    /// Names the file `file` inside this directory, without mutating the
    /// cursor.
    ///
    /// # Panics
    ///
    /// Panics if `file` is empty, is `.` or `..`, or contains a separator.
    pub fn select(&self, file: &str) -> FilePath<S> {
        assert!(
            segment::is_clean::<S>(file),
            "`{file}` is not a valid file name"
        );
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(Segment::new(file));
        FilePath::from_segments(segments)
    }

    /// The deepest directory that is an ancestor of (or equal to) both `self`
    /// and `other`.
    ///
    /// Returns `None` on drive-letter syntaxes when the two paths carry
    /// different drive markers, in which case no common root exists.
    pub fn common_root(&self, other: &Self) -> Option<Self> {
        let shared = path::common_prefix_len(&self.segments, &other.segments);
        if shared < S::RESERVED {
            return None;
        }
        Some(Self::from_segments(self.segments[..shared].to_vec()))
    }

    /// Names of the files directly in this directory, in the enumeration
    /// order of [`OsListing`]
    pub fn list_files(&self) -> Vec<Segment> {
        self.list_files_with(&OsListing)
    }

    /// Names of the files directly in this directory, enumerated by `listing`
    pub fn list_files_with<L: Listing + ?Sized>(&self, listing: &L) -> Vec<Segment> {
        self.list_with(listing, true)
    }

    /// Names of the immediate subdirectories of this directory, in the
    /// enumeration order of [`OsListing`]
    pub fn list_directories(&self) -> Vec<Segment> {
        self.list_directories_with(&OsListing)
    }

    /// Names of the immediate subdirectories of this directory, enumerated by
    /// `listing`
    pub fn list_directories_with<L: Listing + ?Sized>(&self, listing: &L) -> Vec<Segment> {
        self.list_with(listing, false)
    }

    fn list_with<L: Listing + ?Sized>(&self, listing: &L, files: bool) -> Vec<Segment> {
        listing
            .entries(&self.as_absolute_string())
            .into_iter()
            .filter(|entry| entry.is_file == files)
            .map(|entry| Segment::new(entry.name))
            .collect()
    }

    /// Visits every file beneath this directory depth-first, calling `visit`
    /// once per file.
    ///
    /// All files directly in a directory are reported before any file in any
    /// of its subdirectories; sibling subdirectories are visited in listing
    /// order. A directory that cannot be opened is treated as empty and the
    /// walk continues. Symlink cycles are not detected, so walking a cyclic
    /// tree does not terminate.
    pub fn walk<F>(&self, visit: F)
    where
        F: FnMut(&FilePath<S>),
    {
        self.walk_with(&OsListing, visit)
    }

    /// Same as [`walk`](Self::walk), but enumerating directories through
    /// `listing`
    pub fn walk_with<L, F>(&self, listing: &L, visit: F)
    where
        L: Listing + ?Sized,
        F: FnMut(&FilePath<S>),
    {
        walk::run(self, listing, visit)
    }
}

#[cfg(any(unix, windows))]
impl crate::NativeDirectoryPath {
    /// Builds a directory path from a raw string that may be relative,
    /// resolving it against the working directory.
    ///
    /// Failure to obtain the working directory is a system error; everything
    /// else fails the same way as [`DirectoryPath::from_absolute`].
    pub fn qualify(raw: &str) -> Result<Self> {
        if crate::NativeSyntax::is_absolute(raw) {
            return Self::from_absolute(raw);
        }

        let mut combined = crate::locate::working_directory()?.as_absolute_string();
        combined.push(crate::NativeSyntax::SEPARATOR);
        combined.push_str(raw);
        Self::from_absolute(&combined)
    }

    /// Creates this directory on disk. With `ensure_ancestors` every missing
    /// ancestor is created as well. An already-existing directory is not an
    /// error.
    pub fn create_dir(&self, ensure_ancestors: bool) -> Result<()> {
        let target = self.as_absolute_string();
        let outcome = if ensure_ancestors {
            std::fs::create_dir_all(&target)
        } else {
            std::fs::create_dir(&target)
        };

        match outcome {
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            other => Ok(other?),
        }
    }
}

impl<S: Syntax> crate::private::Sealed for DirectoryPath<S> {}

impl<S: Syntax> Absolute<S> for DirectoryPath<S> {
    #[inline]
    fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl<S: Syntax> Clone for DirectoryPath<S> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            _syntax: PhantomData,
        }
    }
}

impl<S: Syntax> fmt::Debug for DirectoryPath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DirectoryPath")
            .field(&self.as_absolute_string())
            .finish()
    }
}

impl<S: Syntax> fmt::Display for DirectoryPath<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_absolute_string(), f)
    }
}

impl<S: Syntax> cmp::PartialEq for DirectoryPath<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl<S: Syntax> cmp::Eq for DirectoryPath<S> {}

impl<S: Syntax> cmp::PartialOrd for DirectoryPath<S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Syntax> cmp::Ord for DirectoryPath<S> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.segments.cmp(&other.segments)
    }
}

impl<S: Syntax> Hash for DirectoryPath<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}
