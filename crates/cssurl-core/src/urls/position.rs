//! Line/column advance of a match, for source mapping.

use serde::Serialize;
use std::fmt;

/// Offsets describing how far a `url(...)` occurrence extends in the original
/// source: the number of line breaks inside it, and the length of its last
/// line (the whole occurrence when it fits on one line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Waypoint {
    pub line_offset: usize,
    /// Counted in characters, not bytes.
    pub column_offset: usize,
}

impl Waypoint {
    /// Computes the waypoint of the original, unnormalized occurrence text.
    pub fn of(span_text: &str) -> Self {
        let line_offset = span_text.matches('\n').count();
        let column_offset = match span_text.rfind('\n') {
            Some(at) => span_text[at + 1..].chars().count(),
            None => span_text.chars().count(),
        };
        Waypoint {
            line_offset,
            column_offset,
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line_offset, self.column_offset)
    }
}
