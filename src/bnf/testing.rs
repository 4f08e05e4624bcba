//! Testing utilities for grammar trees
//!
//!     Tests should not walk the tree by hand. Field-by-field checks are verbose,
//!     break whenever the tree changes shape, and tend to stop at counting things.
//!     Two tools cover almost every case:
//!
//!         1. Curated sources, via [`Sample`](samples::Sample)
//!         2. Fluent assertions, via [`assert_grammar`]
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use prettybnf::bnf::testing::{assert_grammar, samples::Sample};
//!
//!     let grammar = Sample::Duplicates.parse();
//!     assert_grammar(&grammar)
//!         .production_names(&["item", "other", "item"])
//!         .production(2, |p| {
//!             p.alternatives(&["\"second\"", "\"third\""]);
//!         });
//!     ```
//!
//!     Alternatives and terms are compared by canonical text or decoded text, so
//!     an expectation reads like the grammar it describes.

pub mod assertions;
pub mod samples;

pub use assertions::{ExpressionAssertion, GrammarAssertion, ProductionAssertion};
pub use samples::Sample;

use crate::bnf::ast::Grammar;

/// Start a fluent assertion chain over a grammar
pub fn assert_grammar(grammar: &Grammar) -> GrammarAssertion<'_> {
    GrammarAssertion { grammar }
}
