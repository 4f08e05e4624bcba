//! Character cursor over grammar source
//!
//! The cursor is the only thing that touches the raw input. It hands out one
//! character of lookahead, advances one character at a time, and keeps the
//! line/column bookkeeping that every [`SyntaxError`] carries.

use super::error::{ParseResult, SyntaxError, SyntaxErrorKind};
use crate::bnf::ast::Position;

#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    offset: usize,
    position: Position,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            offset: 0,
            position: Position::start(),
        }
    }

    /// The current character, or `None` at end of input. Never advances.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// True if the current character is `ch`
    pub fn at(&self, ch: char) -> bool {
        self.peek() == Some(ch)
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// Consume the current character
    ///
    /// With `expected`, the current character must match it; a mismatch (end of
    /// input included) is an error and nothing is consumed. At end of input with
    /// no expectation, returns `Ok(None)` without advancing.
    pub fn consume(&mut self, expected: Option<char>) -> ParseResult<Option<char>> {
        let current = self.peek();
        if let Some(expected) = expected {
            if current != Some(expected) {
                return Err(self.fail(SyntaxErrorKind::UnexpectedChar {
                    expected,
                    found: current,
                }));
            }
        }
        if let Some(ch) = current {
            self.offset += 1;
            self.position = self.position.advance(ch);
        }
        Ok(current)
    }

    /// Consume whatever character is current (no-op at end of input)
    pub fn advance(&mut self) -> Option<char> {
        let current = self.peek();
        if let Some(ch) = current {
            self.offset += 1;
            self.position = self.position.advance(ch);
        }
        current
    }

    /// Consume exactly `expected`
    pub fn expect(&mut self, expected: char) -> ParseResult<char> {
        self.consume(Some(expected))?;
        Ok(expected)
    }

    /// Build an error located at the current position
    pub fn fail(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.position)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of characters consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }
}
