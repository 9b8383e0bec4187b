use crate::{private, DirectoryPath, Segment, Syntax};

/// Operations shared by every absolute path, generic over its [`Syntax`].
///
/// Both [`FilePath`](crate::FilePath) and [`DirectoryPath`] hold a fully
/// normalized segment sequence and expose it through this trait; everything
/// else here is derived from that sequence. This trait is sealed and cannot
/// be implemented outside of this crate.
pub trait Absolute<S: Syntax>: private::Sealed {
    /// The normalized segment sequence of this path
    fn segments(&self) -> &[Segment];

    /// Renders the path in absolute form.
    ///
    /// Root-relative syntaxes always emit a leading separator, so the root
    /// renders as `"/"`. Drive-letter syntaxes never emit a leading
    /// separator because the first segment already carries the drive marker.
    fn as_absolute_string(&self) -> String {
        format_absolute::<S>(self.segments())
    }

    /// Renders the path relative to `from`.
    ///
    /// Emits one `..` per segment of `from` beyond the shared prefix,
    /// followed by this path's own segments beyond the prefix, joined with
    /// the syntax separator and carrying no leading or trailing separator.
    /// Identical paths render as the empty string.
    fn as_relative_string(&self, from: &DirectoryPath<S>) -> String {
        let here = self.segments();
        let from = from.segments();
        let shared = common_prefix_len(here, from);

        let mut parts = Vec::with_capacity(from.len() - shared + here.len() - shared);
        parts.extend(std::iter::repeat("..").take(from.len() - shared));
        parts.extend(here[shared..].iter().map(Segment::as_str));
        parts.join(S::SEPARATOR_STR)
    }

    /// Returns true if this path is the filesystem root (or a bare drive
    /// marker on drive-letter syntaxes)
    fn is_root(&self) -> bool {
        self.segments().len() <= S::RESERVED
    }

    /// Number of segments below the root
    fn depth(&self) -> usize {
        self.segments().len() - S::RESERVED
    }
}

pub(crate) fn format_absolute<S: Syntax>(segments: &[Segment]) -> String {
    if S::RESERVED == 0 && segments.is_empty() {
        return S::SEPARATOR_STR.to_string();
    }

    let mut out = String::new();
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 || S::RESERVED == 0 {
            out.push(S::SEPARATOR);
        }
        out.push_str(segment.as_str());
    }
    out
}

/// Length of the longest shared segment prefix of `left` and `right`.
///
/// Walks both sequences in lock-step from index 0 comparing segments with
/// exact string equality and stops at the first mismatch or when either side
/// is exhausted. The returned length is simultaneously the divergence
/// position in both sequences.
pub(crate) fn common_prefix_len(left: &[Segment], right: &[Segment]) -> usize {
    left.iter()
        .zip(right.iter())
        .take_while(|(l, r)| l == r)
        .count()
}
