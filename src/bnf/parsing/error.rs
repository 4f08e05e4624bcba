//! Syntax errors
//!
//! Parsing has a single failure mode: the input is not a well formed grammar. The
//! first problem found aborts the parse, and the error records where the cursor
//! stood when it was detected.

use crate::bnf::ast::Position;
use std::fmt;

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A specific character was required; `found` is `None` at end of input
    UnexpectedChar { expected: char, found: Option<char> },
    /// A backslash followed by something other than `n`, `t`, `"` or `\`
    InvalidEscape { found: Option<char> },
    /// Input left over after the last production (strict parsing only)
    TrailingInput { found: char },
}

/// A malformed-input error with its source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    position: Position,
}

/// Result type used throughout the parser
pub type ParseResult<T> = Result<T, SyntaxError>;

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// The human readable message, without the location suffix
    pub fn message(&self) -> String {
        match &self.kind {
            SyntaxErrorKind::UnexpectedChar { expected, found } => {
                format!("Expected {}, got {}", describe(Some(*expected)), describe(*found))
            }
            SyntaxErrorKind::InvalidEscape { found } => match found {
                Some(ch) => format!("Invalid escape sequence: \\{}", visible(*ch)),
                None => "Invalid escape sequence: \\ at end of input".to_string(),
            },
            SyntaxErrorKind::TrailingInput { found } => {
                format!("Unexpected {} after the last production", describe(Some(*found)))
            }
        }
    }
}

fn describe(ch: Option<char>) -> String {
    match ch {
        Some(ch) => format!("'{}'", visible(ch)),
        None => "end of input".to_string(),
    }
}

/// Whitespace control characters are shown in their escaped form
fn visible(ch: char) -> String {
    match ch {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        other => other.to_string(),
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message(), self.position)
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_char_display() {
        let err = SyntaxError::new(
            SyntaxErrorKind::UnexpectedChar {
                expected: '>',
                found: Some('"'),
            },
            Position::new(1, 7),
        );
        assert_eq!(format!("{err}"), "Expected '>', got '\"' at 1:7");
        assert_eq!(err.line(), 1);
        assert_eq!(err.column(), 7);
    }

    #[test]
    fn test_end_of_input_display() {
        let err = SyntaxError::new(
            SyntaxErrorKind::UnexpectedChar {
                expected: ';',
                found: None,
            },
            Position::new(2, 4),
        );
        assert_eq!(format!("{err}"), "Expected ';', got end of input at 2:4");
    }

    #[test]
    fn test_invalid_escape_display() {
        let err = SyntaxError::new(
            SyntaxErrorKind::InvalidEscape { found: Some('q') },
            Position::new(1, 3),
        );
        assert_eq!(err.message(), "Invalid escape sequence: \\q");

        let err = SyntaxError::new(SyntaxErrorKind::InvalidEscape { found: None }, Position::new(1, 3));
        assert_eq!(err.message(), "Invalid escape sequence: \\ at end of input");
    }

    #[test]
    fn test_newline_is_shown_escaped() {
        let err = SyntaxError::new(
            SyntaxErrorKind::UnexpectedChar {
                expected: '"',
                found: Some('\n'),
            },
            Position::new(1, 5),
        );
        assert_eq!(err.message(), "Expected '\"', got '\\n'");
    }

    #[test]
    fn test_trailing_input_display() {
        let err = SyntaxError::new(
            SyntaxErrorKind::TrailingInput { found: '#' },
            Position::new(3, 0),
        );
        assert_eq!(format!("{err}"), "Unexpected '#' after the last production at 3:0");
    }
}
