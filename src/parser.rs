use std::marker::PhantomData;

use crate::{Error, Result, Segment, Syntax};

/// Scanner yielding separator-delimited tokens of a raw path string.
///
/// This is a pure scan with no lookahead beyond the next separator: each call
/// restarts from the previous stop position and the final token runs to the
/// end of the string. Consecutive separators yield empty tokens and a
/// trailing separator yields a final empty token; normalization of those is
/// the business of [`parse_absolute`], not the tokenizer.
#[derive(Clone, Debug)]
pub(crate) struct Tokenizer<'a, S: Syntax> {
    input: &'a str,
    /// Byte offset one past the last consumed separator; `input.len() + 1`
    /// once the final token has been produced
    pos: usize,
    _syntax: PhantomData<S>,
}

impl<'a, S: Syntax> Tokenizer<'a, S> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            _syntax: PhantomData,
        }
    }
}

impl<'a, S: Syntax> Iterator for Tokenizer<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos > self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        match rest.find(S::SEPARATORS) {
            Some(at) => {
                // Separators are ASCII under every syntax, so skipping one
                // byte lands on the next char boundary
                self.pos += at + 1;
                Some(&rest[..at])
            }
            None => {
                self.pos = self.input.len() + 1;
                Some(rest)
            }
        }
    }
}

/// Parses a raw absolute string into a canonical segment sequence.
///
/// Processing is a single left-to-right pass over the tokens: empty tokens
/// and `.` are discarded, `..` pops the most recently pushed segment, and
/// anything else is pushed. Fails with the `InvalidPath` family of errors on
/// empty input, input that is not absolute under `S`, or a `..` that would
/// pop past the root (or past the reserved drive segment).
///
/// Two differently-spelled inputs that normalize to the same sequence are
/// indistinguishable afterwards: `/a/./b/../c` and `/a/c` come out identical.
pub(crate) fn parse_absolute<S: Syntax>(raw: &str) -> Result<Vec<Segment>> {
    if raw.is_empty() {
        return Err(Error::Empty);
    }

    if !S::is_absolute(raw) {
        return Err(Error::NotAbsolute(raw.to_string()));
    }

    let mut segments = Vec::new();
    for token in Tokenizer::<S>::new(raw) {
        match token {
            "" | "." => continue,
            ".." => {
                if segments.len() <= S::RESERVED {
                    return Err(Error::RootEscape(raw.to_string()));
                }
                segments.pop();
            }
            name => segments.push(Segment::new(name)),
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UnixSyntax, WindowsSyntax};

    fn tokens<S: Syntax>(input: &str) -> Vec<&str> {
        Tokenizer::<S>::new(input).collect()
    }

    fn unix(raw: &str) -> Result<Vec<Segment>> {
        parse_absolute::<UnixSyntax>(raw)
    }

    fn windows(raw: &str) -> Result<Vec<Segment>> {
        parse_absolute::<WindowsSyntax>(raw)
    }

    mod tokenizer {
        use super::*;

        #[test]
        fn should_split_on_separators() {
            assert_eq!(tokens::<UnixSyntax>("/a/b"), ["", "a", "b"]);
            assert_eq!(tokens::<UnixSyntax>("a"), ["a"]);
        }

        #[test]
        fn should_yield_empty_tokens_for_consecutive_separators() {
            assert_eq!(tokens::<UnixSyntax>("//a///b"), ["", "", "a", "", "", "b"]);
        }

        #[test]
        fn should_yield_final_empty_token_for_trailing_separator() {
            assert_eq!(tokens::<UnixSyntax>("/a/"), ["", "a", ""]);
        }

        #[test]
        fn should_accept_either_separator_under_windows_syntax() {
            assert_eq!(tokens::<WindowsSyntax>("c:\\a/b"), ["c:", "a", "b"]);

            // Backslash is an ordinary character under unix syntax
            assert_eq!(tokens::<UnixSyntax>("a\\b"), ["a\\b"]);
        }
    }

    mod normalizer {
        use super::*;

        #[test]
        fn should_discard_empty_and_current_dir_tokens() {
            let segments = unix("/a//.//b/").unwrap();
            assert_eq!(segments, [Segment::new("a"), Segment::new("b")]);
        }

        #[test]
        fn should_resolve_parent_dir_tokens() {
            assert_eq!(unix("/a/./b/../c").unwrap(), unix("/a/c").unwrap());
            assert_eq!(unix("/a/b/..").unwrap(), unix("/a").unwrap());
        }

        #[test]
        fn should_reduce_root_to_the_empty_sequence() {
            assert!(unix("/").unwrap().is_empty());
            assert!(unix("///").unwrap().is_empty());
            assert!(unix("/a/..").unwrap().is_empty());
        }

        #[test]
        fn should_fail_on_empty_input() {
            assert!(matches!(unix(""), Err(Error::Empty)));
        }

        #[test]
        fn should_fail_on_relative_input() {
            assert!(matches!(unix("a/b"), Err(Error::NotAbsolute(_))));
            assert!(matches!(windows("\\a\\b"), Err(Error::NotAbsolute(_))));
            assert!(matches!(windows("ab/c"), Err(Error::NotAbsolute(_))));
        }

        #[test]
        fn should_fail_on_root_escape() {
            assert!(matches!(unix("/../x"), Err(Error::RootEscape(_))));
            assert!(matches!(unix("/a/../.."), Err(Error::RootEscape(_))));
        }

        #[test]
        fn should_keep_the_drive_segment_reserved() {
            let segments = windows("c:\\Users\\me").unwrap();
            assert_eq!(
                segments,
                [Segment::new("c:"), Segment::new("Users"), Segment::new("me")]
            );

            // `..` may pop ordinary segments but never the drive marker
            assert_eq!(windows("c:/Users/..").unwrap(), [Segment::new("c:")]);
            assert!(matches!(windows("c:\\.."), Err(Error::RootEscape(_))));
            assert!(matches!(windows("c:/Users/../.."), Err(Error::RootEscape(_))));
        }

        #[test]
        fn should_normalize_idempotently() {
            for raw in ["/", "/a", "/a/b/c", "/a/./b/../c", "//x//y//"] {
                let first = unix(raw).unwrap();
                let rendered = crate::path::format_absolute::<UnixSyntax>(&first);
                assert_eq!(unix(&rendered).unwrap(), first, "round-trip of {raw}");
            }
        }
    }
}
