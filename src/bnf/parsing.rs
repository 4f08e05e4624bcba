//! Grammar parsing
//!
//! A hand-written recursive descent parser with one character of lookahead:
//!
//!     cursor      Owns the input and the line/column bookkeeping
//!     lexical     Whitespace, escapes and the two text character classes
//!     parser      One method per rule, terms up to whole grammars
//!     error       The syntax error every failure surfaces as
//!
//! Trailing input
//!
//!     The notation stops reading once no further production starts (no `<`), so
//!     [`parse`] silently ignores anything after the last production. That keeps
//!     existing grammar files working, including ones with trailing notes. Use
//!     [`parse_strict`] (or [`ParseOptions::strict`]) to reject such leftovers,
//!     or [`parse_reporting_trailing`] to find out where they start.

pub mod cursor;
pub mod error;
pub mod lexical;
pub mod parser;

pub use cursor::Cursor;
pub use error::{ParseResult, SyntaxError, SyntaxErrorKind};
pub use parser::Parser;

use crate::bnf::ast::Grammar;

/// Knobs for a single parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on anything but whitespace after the last production
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Parse grammar source, ignoring anything after the last production
pub fn parse(source: &str) -> ParseResult<Grammar> {
    parse_with(source, &ParseOptions::default())
}

/// Parse grammar source, requiring the whole input to be consumed
pub fn parse_strict(source: &str) -> ParseResult<Grammar> {
    parse_with(source, &ParseOptions::strict())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> ParseResult<Grammar> {
    parse_reporting_trailing(source, options).map(|(grammar, _)| grammar)
}

/// Parse like [`parse_with`], also returning the error a strict parse would have
/// raised for whatever follows the last production
///
/// With `options.strict` that error fails the parse instead, so the second
/// element is always `None`.
pub fn parse_reporting_trailing(
    source: &str,
    options: &ParseOptions,
) -> ParseResult<(Grammar, Option<SyntaxError>)> {
    let mut parser = Parser::new(source);
    let grammar = parser.parse_grammar()?;
    match parser.expect_end().err() {
        Some(trailing) if options.strict => Err(trailing),
        trailing => Ok((grammar, trailing)),
    }
}
