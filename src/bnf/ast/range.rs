//! Position tracking for source locations
//!
//! Lines are 1-based. Columns count the characters consumed since the last newline,
//! so the first character of a line sits at column 0 and an error reported at
//! `3:5` points at the sixth character of the third line.

use std::fmt;

/// Represents a position in source text (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position of the first character of any input
    pub fn start() -> Self {
        Self::new(1, 0)
    }

    /// Position after consuming `ch`
    pub(crate) fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self::new(self.line + 1, 0)
        } else {
            Self::new(self.line, self.column + 1)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}
