//! Grammar tree
//!
//! The tree produced by [`parse`](crate::bnf::parsing::parse) and consumed by the
//! formatters (and by any generator that walks the grammar to derive sentences).
//!
//! Ownership runs strictly downwards: a [`Grammar`] owns its [`Production`]s, which
//! own their alternative [`Expression`]s, which own their [`Term`]s. Nodes are
//! immutable once built, and every collection is non-empty by construction.

pub mod elements;
pub mod node;
pub mod range;
pub mod snapshot;

pub use elements::{Expression, Grammar, Nonterminal, Production, Term, Terminal};
pub use node::Node;
pub use range::Position;
pub use snapshot::{snapshot_from_grammar, snapshot_node, AstSnapshot};
