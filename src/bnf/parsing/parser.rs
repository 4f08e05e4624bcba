//! Recursive descent parser
//!
//! One method per rule of the notation:
//!
//! ```text
//! grammar      ::= production (ws production)*
//! production   ::= nonterminal ws "::=" ws expressions ";"
//! expressions  ::= expression ("|" ws expression)*
//! expression   ::= term (ws term)*
//! term         ::= nonterminal | terminal
//! nonterminal  ::= "<" text ">"
//! terminal     ::= '"' terminal_text '"'
//! ```
//!
//! Every decision is made on the current character alone; nothing is ever
//! backtracked. Each method leaves the cursor just past what it parsed.

use super::cursor::Cursor;
use super::error::{ParseResult, SyntaxErrorKind};
use super::lexical::{read_plain_text, read_terminal_text, skip_whitespace};
use crate::bnf::ast::{Expression, Grammar, Nonterminal, Production, Term, Terminal};

#[derive(Debug, Clone)]
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// `"` terminal_text `"`
    pub fn parse_terminal(&mut self) -> ParseResult<Terminal> {
        self.cursor.expect('"')?;
        let text = read_terminal_text(&mut self.cursor)?;
        self.cursor.expect('"')?;
        Ok(Terminal::new(text))
    }

    /// `<` text `>`
    pub fn parse_nonterminal(&mut self) -> ParseResult<Nonterminal> {
        self.cursor.expect('<')?;
        let text = read_plain_text(&mut self.cursor)?;
        self.cursor.expect('>')?;
        Ok(Nonterminal::new(text))
    }

    /// A nonterminal if the current character is `<`, otherwise a terminal
    pub fn parse_term(&mut self) -> ParseResult<Term> {
        if self.cursor.at('<') {
            self.parse_nonterminal().map(Term::Nonterminal)
        } else {
            self.parse_terminal().map(Term::Terminal)
        }
    }

    /// One or more terms, each followed by optional whitespace
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        let mut expression = Expression::new(self.parse_term()?);
        skip_whitespace(&mut self.cursor);
        while self.cursor.at('<') || self.cursor.at('"') {
            expression = expression.with_term(self.parse_term()?);
            skip_whitespace(&mut self.cursor);
        }
        Ok(expression)
    }

    /// Alternatives separated by `|`, in source order
    pub fn parse_expressions(&mut self) -> ParseResult<Vec<Expression>> {
        let mut expressions = vec![self.parse_expression()?];
        while self.cursor.at('|') {
            self.cursor.expect('|')?;
            skip_whitespace(&mut self.cursor);
            expressions.push(self.parse_expression()?);
        }
        Ok(expressions)
    }

    /// `<lhs> ::= alternatives ;`
    pub fn parse_production(&mut self) -> ParseResult<Production> {
        let lhs = self.parse_nonterminal()?;
        skip_whitespace(&mut self.cursor);
        for ch in [':', ':', '='] {
            self.cursor.expect(ch)?;
        }
        skip_whitespace(&mut self.cursor);
        let rhs = self.parse_expressions()?;
        self.cursor.expect(';')?;
        Ok(Production::from_parsed(lhs, rhs))
    }

    /// One or more productions, each followed by optional whitespace
    pub fn parse_grammar(&mut self) -> ParseResult<Grammar> {
        let mut grammar = Grammar::new(self.parse_production()?);
        skip_whitespace(&mut self.cursor);
        while self.cursor.at('<') {
            grammar = grammar.with_production(self.parse_production()?);
            skip_whitespace(&mut self.cursor);
        }
        Ok(grammar)
    }

    /// Require that nothing but whitespace remains
    pub fn expect_end(&mut self) -> ParseResult<()> {
        skip_whitespace(&mut self.cursor);
        match self.cursor.peek() {
            None => Ok(()),
            Some(found) => Err(self.cursor.fail(SyntaxErrorKind::TrailingInput { found })),
        }
    }
}
