//! Curated sample grammars
//!
//! The files under `samples/` are verified grammar sources. Tests should load
//! them from here instead of inlining ad-hoc grammar strings, so that a change
//! to the notation only means revisiting one place.

use crate::bnf::ast::Grammar;
use crate::bnf::parsing::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A small English sentence generator
    Sentences,
    /// Numbers joined by word operators, alternatives split over lines
    Arithmetic,
    /// Every escape sequence, plus an empty terminal
    Escapes,
    /// Angle brackets used literally inside terminals
    Brackets,
    /// Two productions sharing a name
    Duplicates,
    /// The notation described in itself
    Notation,
}

impl Sample {
    pub const ALL: [Sample; 6] = [
        Sample::Sentences,
        Sample::Arithmetic,
        Sample::Escapes,
        Sample::Brackets,
        Sample::Duplicates,
        Sample::Notation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sample::Sentences => "sentences",
            Sample::Arithmetic => "arithmetic",
            Sample::Escapes => "escapes",
            Sample::Brackets => "brackets",
            Sample::Duplicates => "duplicates",
            Sample::Notation => "notation",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Sample::Sentences => include_str!("../../../samples/sentences.bnf"),
            Sample::Arithmetic => include_str!("../../../samples/arithmetic.bnf"),
            Sample::Escapes => include_str!("../../../samples/escapes.bnf"),
            Sample::Brackets => include_str!("../../../samples/brackets.bnf"),
            Sample::Duplicates => include_str!("../../../samples/duplicates.bnf"),
            Sample::Notation => include_str!("../../../samples/notation.bnf"),
        }
    }

    /// Parse the sample, panicking with the syntax error if it does not parse
    pub fn parse(&self) -> Grammar {
        parse(self.source())
            .unwrap_or_else(|e| panic!("sample '{}' failed to parse: {}", self.name(), e))
    }

    pub fn from_name(name: &str) -> Option<Sample> {
        Sample::ALL.into_iter().find(|sample| sample.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_parses_completely() {
        for sample in Sample::ALL {
            let result = crate::bnf::parsing::parse_strict(sample.source());
            assert!(result.is_ok(), "{}: {:?}", sample.name(), result.err());
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Sample::from_name("escapes"), Some(Sample::Escapes));
        assert_eq!(Sample::from_name("nope"), None);
    }
}
