//! Lexical rules
//!
//! Character classes, whitespace and escape decoding. Text inside `<...>` (plain
//! text) is limited to ASCII letters, digits, the delimiters `- _ | : = ; ` and
//! escapes. Text inside `"..."` (terminal text) additionally allows `<` and `>`.

use super::cursor::Cursor;
use super::error::{ParseResult, SyntaxErrorKind};

const WHITESPACE: [char; 3] = [' ', '\n', '\t'];
const DELIMITERS: [char; 7] = ['-', '_', '|', ':', '=', ';', ' '];

/// A character allowed in plain text (a backslash starts an escape)
pub fn is_plain(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || DELIMITERS.contains(&ch) || ch == '\\'
}

/// A character allowed in terminal text
pub fn is_terminal(ch: char) -> bool {
    is_plain(ch) || ch == '<' || ch == '>'
}

/// Whether the cursor sits on a plain text character
pub fn is_plain_char(cursor: &Cursor) -> bool {
    cursor.peek().is_some_and(is_plain)
}

/// Whether the cursor sits on a terminal text character
pub fn is_terminal_char(cursor: &Cursor) -> bool {
    cursor.peek().is_some_and(is_terminal)
}

/// Skip spaces, newlines and tabs, returning exactly what was skipped
pub fn skip_whitespace(cursor: &mut Cursor) -> String {
    let mut skipped = String::new();
    while let Some(ch) = cursor.peek().filter(|ch| WHITESPACE.contains(ch)) {
        cursor.advance();
        skipped.push(ch);
    }
    skipped
}

/// Decode one escape sequence starting at a backslash
pub fn decode_escape(cursor: &mut Cursor) -> ParseResult<char> {
    cursor.expect('\\')?;
    let decoded = match cursor.peek() {
        Some('n') => '\n',
        Some('t') => '\t',
        Some('"') => '"',
        Some('\\') => '\\',
        found => return Err(cursor.fail(SyntaxErrorKind::InvalidEscape { found })),
    };
    cursor.advance();
    Ok(decoded)
}

fn read_text(cursor: &mut Cursor, at_text_char: fn(&Cursor) -> bool) -> ParseResult<String> {
    let mut text = String::new();
    while at_text_char(cursor) {
        if cursor.at('\\') {
            text.push(decode_escape(cursor)?);
        } else if let Some(ch) = cursor.advance() {
            text.push(ch);
        }
    }
    Ok(text)
}

/// Read and decode plain text (may be empty)
pub fn read_plain_text(cursor: &mut Cursor) -> ParseResult<String> {
    read_text(cursor, is_plain_char)
}

/// Read and decode terminal text (may be empty)
pub fn read_terminal_text(cursor: &mut Cursor) -> ParseResult<String> {
    read_text(cursor, is_terminal_char)
}
