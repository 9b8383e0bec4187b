use std::fs;

use log::{debug, trace};

use crate::{DirectoryPath, FilePath, Segment, Syntax};

/// One entry of a directory listing.
///
/// Everything that is not a directory counts as a file, matching how the
/// walker treats symlinks and special files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Name of the entry within its directory
    pub name: String,

    /// True unless the entry is itself a directory
    pub is_file: bool,
}

impl Entry {
    /// Convenience constructor for a file entry
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: true,
        }
    }

    /// Convenience constructor for a directory entry
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: false,
        }
    }
}

/// Directory content enumeration, the one collaborator the walker calls out
/// to.
///
/// A directory that cannot be opened must yield an empty listing rather than
/// an error; the walker treats it like a directory with no content and moves
/// on. Enumeration order is implementation-defined and the walker preserves
/// it for sibling visits.
pub trait Listing {
    /// Lists the immediate entries of the directory at `directory`, given in
    /// absolute string form
    fn entries(&self, directory: &str) -> Vec<Entry>;
}

/// [`Listing`] over the real filesystem via [`std::fs::read_dir`].
///
/// Unreadable directories, unreadable entries, and entries whose names are
/// not valid UTF-8 are silently skipped.
#[derive(Copy, Clone, Debug, Default)]
pub struct OsListing;

impl Listing for OsListing {
    fn entries(&self, directory: &str) -> Vec<Entry> {
        let reader = match fs::read_dir(directory) {
            Ok(reader) => reader,
            Err(err) => {
                debug!("cannot list `{directory}`: {err}; treating as empty");
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for entry in reader.flatten() {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(Entry {
                name,
                is_file: !is_dir,
            });
        }
        entries
    }
}

/// Pending unit of traversal work; the explicit stack of these replaces
/// recursive call frames.
#[derive(Clone, Debug)]
enum Action {
    /// Move the marker down into the named subdirectory and process it
    Descend(Segment),

    /// Move the marker up one level, undoing the matching `Descend`
    Ascend,
}

/// Iterative depth-first traversal of the tree rooted at `root`.
///
/// State is a `marker` cursor plus a LIFO stack of [`Action`]s. Every
/// `Descend` pushes its matching `Ascend` *before* pushing the
/// subdirectories' own descends, so a subtree is fully drained and the
/// marker restored before a sibling is visited. When an action is popped the
/// marker is always the directory containing (for a descend) or one level
/// below (for an ascend) the action's target, and it is back at `root` when
/// the stack runs out.
pub(crate) fn run<S, L, F>(root: &DirectoryPath<S>, listing: &L, mut visit: F)
where
    S: Syntax,
    L: Listing + ?Sized,
    F: FnMut(&FilePath<S>),
{
    let mut marker = root.clone();
    let mut stack: Vec<Action> = Vec::new();

    visit_files(&marker, listing, &mut visit);
    push_descends(&mut stack, &marker, listing);

    while let Some(action) = stack.pop() {
        match action {
            Action::Ascend => {
                trace!("ascending out of `{marker}`");
                marker.exit();
            }
            Action::Descend(name) => {
                trace!("descending into `{name}` under `{marker}`");
                marker.enter(name.as_str());
                stack.push(Action::Ascend);
                visit_files(&marker, listing, &mut visit);
                push_descends(&mut stack, &marker, listing);
            }
        }
    }

    debug_assert_eq!(marker, *root);
}

fn visit_files<S, L, F>(marker: &DirectoryPath<S>, listing: &L, visit: &mut F)
where
    S: Syntax,
    L: Listing + ?Sized,
    F: FnMut(&FilePath<S>),
{
    for name in marker.list_files_with(listing) {
        visit(&marker.select(name.as_str()));
    }
}

fn push_descends<S, L>(stack: &mut Vec<Action>, marker: &DirectoryPath<S>, listing: &L)
where
    S: Syntax,
    L: Listing + ?Sized,
{
    // Reversed so the first-listed subdirectory ends up on top of the stack
    for name in marker.list_directories_with(listing).into_iter().rev() {
        stack.push(Action::Descend(name));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{Absolute, UnixDirectoryPath};

    /// In-memory tree: absolute directory string to its entries. Directories
    /// missing from the map behave like unreadable ones.
    struct FakeTree(HashMap<&'static str, Vec<Entry>>);

    impl FakeTree {
        fn new(dirs: &[(&'static str, Vec<Entry>)]) -> Self {
            Self(dirs.iter().cloned().collect())
        }
    }

    impl Listing for FakeTree {
        fn entries(&self, directory: &str) -> Vec<Entry> {
            self.0.get(directory).cloned().unwrap_or_default()
        }
    }

    fn walked(root: &str, tree: &FakeTree) -> Vec<String> {
        let root = UnixDirectoryPath::from_absolute(root).unwrap();
        let mut seen = Vec::new();
        root.walk_with(tree, |file| seen.push(file.as_absolute_string()));
        seen
    }

    #[test]
    fn should_report_a_directory_before_descending() {
        let tree = FakeTree::new(&[
            (
                "/r",
                vec![
                    Entry::file("f1"),
                    Entry::directory("d"),
                    Entry::file("f3"),
                ],
            ),
            ("/r/d", vec![Entry::file("f2")]),
        ]);

        // Root files come first in listing order, then the subtree
        assert_eq!(walked("/r", &tree), ["/r/f1", "/r/f3", "/r/d/f2"]);
    }

    #[test]
    fn should_drain_a_subtree_before_visiting_the_next_sibling() {
        let tree = FakeTree::new(&[
            (
                "/r",
                vec![Entry::directory("a"), Entry::directory("b")],
            ),
            ("/r/a", vec![Entry::file("a1"), Entry::directory("deep")]),
            ("/r/a/deep", vec![Entry::file("a2")]),
            ("/r/b", vec![Entry::file("b1")]),
        ]);

        assert_eq!(
            walked("/r", &tree),
            ["/r/a/a1", "/r/a/deep/a2", "/r/b/b1"]
        );
    }

    #[test]
    fn should_keep_files_ahead_of_subdirectory_files_at_every_level() {
        let tree = FakeTree::new(&[
            ("/r", vec![Entry::directory("d1"), Entry::file("top")]),
            (
                "/r/d1",
                vec![Entry::directory("d2"), Entry::file("mid")],
            ),
            ("/r/d1/d2", vec![Entry::file("leaf")]),
        ]);

        assert_eq!(
            walked("/r", &tree),
            ["/r/top", "/r/d1/mid", "/r/d1/d2/leaf"]
        );
    }

    #[test]
    fn should_treat_unreadable_directories_as_empty() {
        // `/r/locked` has no entry in the map, standing in for a directory
        // the listing cannot open
        let tree = FakeTree::new(&[
            (
                "/r",
                vec![
                    Entry::directory("locked"),
                    Entry::directory("open"),
                    Entry::file("f"),
                ],
            ),
            ("/r/open", vec![Entry::file("g")]),
        ]);

        assert_eq!(walked("/r", &tree), ["/r/f", "/r/open/g"]);
    }

    #[test]
    fn should_leave_the_cursor_reusable_after_the_walk() {
        let tree = FakeTree::new(&[
            ("/r", vec![Entry::directory("d")]),
            ("/r/d", vec![Entry::file("f")]),
        ]);

        let root = UnixDirectoryPath::from_absolute("/r").unwrap();
        let mut count = 0;
        root.walk_with(&tree, |_| count += 1);
        assert_eq!(count, 1);
        assert_eq!(root, UnixDirectoryPath::from_absolute("/r").unwrap());

        // Walking again produces the same result
        root.walk_with(&tree, |_| count += 1);
        assert_eq!(count, 2);
    }

    #[test]
    fn should_handle_an_empty_root() {
        let tree = FakeTree::new(&[("/r", Vec::new())]);
        assert!(walked("/r", &tree).is_empty());
    }

    #[test]
    fn should_walk_trees_deeper_than_any_reasonable_call_stack() {
        // 60 nested directories with one file each; the explicit stack keeps
        // this linear in memory and ordered outermost first
        let mut dirs: Vec<(String, Vec<Entry>)> = Vec::new();
        let mut path = String::from("/r");
        for depth in 0..60 {
            dirs.push((
                path.clone(),
                vec![Entry::file(format!("f{depth}")), Entry::directory("sub")],
            ));
            path.push_str("/sub");
        }
        dirs.push((path, Vec::new()));

        struct OwnedTree(HashMap<String, Vec<Entry>>);
        impl Listing for OwnedTree {
            fn entries(&self, directory: &str) -> Vec<Entry> {
                self.0.get(directory).cloned().unwrap_or_default()
            }
        }
        let tree = OwnedTree(dirs.into_iter().collect());

        let root = UnixDirectoryPath::from_absolute("/r").unwrap();
        let mut seen = Vec::new();
        root.walk_with(&tree, |file| seen.push(file.as_absolute_string()));

        assert_eq!(seen.len(), 60);
        assert_eq!(seen[0], "/r/f0");
        assert!(seen[59].ends_with("/f59"));
    }
}
