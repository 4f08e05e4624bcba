//! Canonical grammar text
//!
//! The exact inverse of the parser: whatever [`stringify`] produces parses back to
//! an equal tree. Layout is fixed, one production per line:
//!
//! ```text
//! <lhs> ::= "term" <term> | "alternative";
//! ```
//!
//! Terminal and nonterminal text is re-escaped (`\` → `\\`, `"` → `\"`, newline →
//! `\n`, tab → `\t`). Nonterminal names never need it when they came from the
//! parser, but are treated the same way.

use super::registry::{FormatError, Formatter};
use crate::bnf::ast::{Expression, Grammar, Node, Nonterminal, Production, Term, Terminal};
use std::fmt;

/// Escape text so it reads back unchanged inside quotes or angle brackets
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn join<'a, I, N>(nodes: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a N>,
    N: 'a,
    &'a N: Into<Node<'a>>,
{
    nodes
        .into_iter()
        .map(|node| stringify(node))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Render any grammar element as canonical grammar text
pub fn stringify<'a>(node: impl Into<Node<'a>>) -> String {
    match node.into() {
        Node::Terminal(terminal) => format!("\"{}\"", escape(terminal.text())),
        Node::Nonterminal(nonterminal) => format!("<{}>", escape(nonterminal.text())),
        Node::Expression(expression) => join(expression.terms(), " "),
        Node::Production(production) => format!(
            "{} ::= {};",
            stringify(production.lhs()),
            join(production.rhs(), " | ")
        ),
        Node::Grammar(grammar) => {
            let mut text = join(grammar.productions(), "\n");
            text.push('\n');
            text
        }
    }
}

macro_rules! display_as_canonical {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&stringify(self))
                }
            }
        )*
    };
}

display_as_canonical!(Terminal, Nonterminal, Term, Expression, Production, Grammar);

/// Formatter implementation for canonical grammar text
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn name(&self) -> &str {
        "canonical"
    }

    fn serialize(&self, grammar: &Grammar) -> Result<String, FormatError> {
        Ok(stringify(grammar))
    }

    fn description(&self) -> &str {
        "Canonical grammar text, one production per line"
    }
}
