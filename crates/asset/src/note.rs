//! Quality notes: lenient-parse defaults reported back to the caller.

use std::fmt;

use crate::scanner::Directive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseNote {
    /// Component `index` of a `v`/`vt`/`vn` line had no number; it (and any
    /// later component) reads as `0.0`.
    MissingComponent {
        line: usize,
        directive: Directive,
        index: usize,
    },
    /// A face line had fewer than three index groups; group `group` and the
    /// ones after it are all-zero.
    MissingIndexGroup { line: usize, group: usize },
    /// A face line had `corners` index groups; only the first three are kept.
    NonTriangularFace { line: usize, corners: usize },
}

impl ParseNote {
    pub fn line(&self) -> usize {
        match *self {
            ParseNote::MissingComponent { line, .. }
            | ParseNote::MissingIndexGroup { line, .. }
            | ParseNote::NonTriangularFace { line, .. } => line,
        }
    }
}

impl fmt::Display for ParseNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNote::MissingComponent {
                line,
                directive,
                index,
            } => write!(
                f,
                "line {line}: '{directive}' is missing component {index}, defaulted to 0"
            ),
            ParseNote::MissingIndexGroup { line, group } => write!(
                f,
                "line {line}: face has only {group} index groups, missing ones are 0"
            ),
            ParseNote::NonTriangularFace { line, corners } => write!(
                f,
                "line {line}: face has {corners} corners, only the first 3 are kept"
            ),
        }
    }
}
