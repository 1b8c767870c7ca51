//! Parsing of single dependency file lines.
//!
//! Each line contains an optional target followed by a colon and then
//! space-separated prerequisites. Spaces within filenames are escaped
//! with a backslash; a list too long for one line is continued onto the
//! next by a backslash before the line terminator.

/// Position of a physical line within a dependency record.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineStart {
    /// The line begins a new target clause.
    Target,
    /// The line continues the prerequisite list of the previous clause.
    Continuation,
}

impl LineStart {
    /// State for the line following the given raw line.
    ///
    /// A clause continues exactly when a backslash stands immediately
    /// before the line terminator. This looks at the raw line,
    /// not at the parsed remainder.
    pub fn after(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.ends_with('\\') {
            Self::Continuation
        } else {
            Self::Target
        }
    }
}

/// Extract the prerequisite names from one raw line.
///
/// On a [`LineStart::Target`] line, everything up to and including the
/// first colon is the target name and is dropped. Escaped spaces are
/// kept as-is in the extracted names, backslash included.
///
/// A remainder without any unescaped space yields a single name;
/// for an empty remainder that name is the empty string.
pub fn prerequisites(line: &str, start: LineStart) -> Vec<String> {
    let mut names = Vec::new();

    let mut rest = line;
    if start == LineStart::Target {
        if let Some(pos) = rest.find(':') {
            rest = &rest[pos + 1..];
        }
    }

    let rest = rest.trim();
    let mut rest = rest.trim_end_matches('\\');

    loop {
        rest = rest.trim();
        match unescaped_space(rest) {
            None => {
                names.push(rest.to_string());
                return names;
            }
            Some(pos) => {
                names.push(rest[..pos].to_string());
                rest = &rest[pos + 1..];
            }
        }
    }
}

/// Position of the first space that separates two names.
///
/// Linear left-to-right scan with a one-byte lookback:
/// a space preceded by a backslash is part of a filename,
/// so the search resumes behind it instead of stopping.
fn unescaped_space(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = s.find(' ')?;
    while pos > 0 && bytes[pos - 1] == b'\\' {
        pos = s[pos + 1..].find(' ').map(|next| pos + 1 + next)?;
    }
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_record() {
        let deps = prerequisites("a.o: a.c a.h\n", LineStart::Target);
        assert_eq!(deps, ["a.c", "a.h"]);
    }

    #[test]
    fn escaped_space_stays_in_name() {
        let deps = prerequisites("a.o: foo\\ bar.h\n", LineStart::Target);
        assert_eq!(deps, ["foo\\ bar.h"]);
        let deps = prerequisites("a.o: foo\\ bar.h baz.h\n", LineStart::Target);
        assert_eq!(deps, ["foo\\ bar.h", "baz.h"]);
    }

    #[test]
    fn continuation_fold() {
        let lines = ["a.o: a.c \\\n", " a.h\n"];
        let mut deps = Vec::new();
        let mut start = LineStart::Target;
        for line in lines {
            deps.extend(prerequisites(line, start));
            start = LineStart::after(line);
        }
        assert_eq!(deps, ["a.c", "a.h"]);
    }

    #[test]
    fn colon_kept_on_continuation_line() {
        let deps = prerequisites("b.o: b.c\n", LineStart::Continuation);
        assert_eq!(deps, ["b.o:", "b.c"]);
    }

    #[test]
    fn repeated_separators() {
        let deps = prerequisites("a.o:  a.c   a.h \n", LineStart::Target);
        assert_eq!(deps, ["a.c", "a.h"]);
    }

    #[test]
    fn trailing_backslash_is_stripped() {
        let deps = prerequisites("a.o: a.c \\\n", LineStart::Target);
        assert_eq!(deps, ["a.c"]);
    }

    #[test]
    fn empty_remainder_yields_empty_name() {
        assert_eq!(prerequisites("\n", LineStart::Continuation), [""]);
        assert_eq!(prerequisites("a.o:\n", LineStart::Target), [""]);
    }

    #[test]
    fn line_start_after() {
        use LineStart::*;
        assert_eq!(LineStart::after("a.o: a.c \\\n"), Continuation);
        assert_eq!(LineStart::after("a.o: a.c \\\r\n"), Continuation);
        assert_eq!(LineStart::after("a.o: a.c \\"), Continuation);
        assert_eq!(LineStart::after("a.o: a.c\n"), Target);
        assert_eq!(LineStart::after("\n"), Target);
    }
}
