//! # prettybnf
//!
//! A parser and pretty printer for a small BNF grammar notation:
//!
//! ```text
//! <sentence> ::= <subject> " " <verb> | "hello";
//! <subject>  ::= "the cat" | "a dog";
//! <verb>     ::= "sleeps";
//! ```
//!
//! File Layout
//!
//!     src/bnf
//!       ├── ast        The grammar tree (and the position/snapshot helpers around it)
//!       ├── parsing    Cursor, lexical helpers and the recursive descent parser
//!       ├── formats    Canonical serializer plus the pluggable output formats
//!       ├── loader     Reading grammar files from disk or stdin
//!       └── testing    Fluent assertions and curated sample grammars
//!
//! The two entry points most callers need are [`parse`](bnf::parsing::parse) and
//! [`stringify`](bnf::formats::canonical::stringify), re-exported at the crate root.
//! For comprehensive testing guidelines, see the [testing module](bnf::testing).

pub mod bnf;

pub use bnf::ast::{Expression, Grammar, Node, Nonterminal, Production, Term, Terminal};
pub use bnf::formats::canonical::stringify;
pub use bnf::parsing::{
    parse, parse_reporting_trailing, parse_strict, parse_with, ParseOptions, Parser, SyntaxError,
};

/// Version of the grammar library, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(VERSION, "0.1.2");
    }

    #[test]
    fn test_root_reexports_round_trip() {
        let grammar = parse("<a> ::= \"x\";").unwrap();
        assert_eq!(stringify(&grammar), "<a> ::= \"x\";\n");
    }
}
