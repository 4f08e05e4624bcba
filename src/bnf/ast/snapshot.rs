//! AST Snapshot - a normalized intermediate representation of the grammar tree
//!
//! The snapshot captures the tree structure with node types, labels and children,
//! so that the treeviz format only deals with layout. The tag format prints
//! decoded text rather than labels and walks [`Node`] directly.
//!
//! Labels are the canonical text of the node: `"hello"` for a terminal, `<name>`
//! for a nonterminal or production, the whole alternative for an expression.

use super::elements::Grammar;
use super::node::Node;
use crate::bnf::formats::canonical::stringify;
use serde::Serialize;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Production", "Terminal")
    pub node_type: String,

    /// The primary label of the node
    pub label: String,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

fn label_for(node: Node<'_>) -> String {
    match node {
        Node::Grammar(grammar) => match grammar.len() {
            1 => "1 production".to_string(),
            n => format!("{n} productions"),
        },
        Node::Production(production) => stringify(production.lhs()),
        Node::Expression(_) | Node::Terminal(_) | Node::Nonterminal(_) => stringify(node),
    }
}

/// Create a snapshot of a node and all its descendants
pub fn snapshot_node<'a>(node: impl Into<Node<'a>>) -> AstSnapshot {
    let node = node.into();
    let children = node
        .children()
        .into_iter()
        .map(|child| snapshot_node(child))
        .collect();
    AstSnapshot::new(node.node_type().to_string(), label_for(node)).with_children(children)
}

/// Create a snapshot of a whole grammar
pub fn snapshot_from_grammar(grammar: &Grammar) -> AstSnapshot {
    snapshot_node(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnf::parsing::parse;

    #[test]
    fn test_snapshot_structure() {
        let grammar = parse("<a> ::= \"x\" <b> | \"y\";\n<b> ::= \"z\";").unwrap();
        let snapshot = snapshot_from_grammar(&grammar);

        assert_eq!(snapshot.node_type, "Grammar");
        assert_eq!(snapshot.label, "2 productions");
        assert_eq!(snapshot.children.len(), 2);

        let first = &snapshot.children[0];
        assert_eq!(first.node_type, "Production");
        assert_eq!(first.label, "<a>");
        assert_eq!(first.children.len(), 2);
        assert_eq!(first.children[0].label, "\"x\" <b>");
        assert_eq!(first.children[0].children[1].node_type, "Nonterminal");
        assert_eq!(first.children[1].label, "\"y\"");
    }

    #[test]
    fn test_snapshot_of_a_single_term() {
        let grammar = parse("<a> ::= <b>;").unwrap();
        let term = &grammar.start().rhs()[0].terms()[0];
        assert_eq!(
            snapshot_node(term),
            AstSnapshot::new("Nonterminal".to_string(), "<b>".to_string())
        );
    }

    #[test]
    fn test_single_production_label() {
        let grammar = parse("<a> ::= \"x\";").unwrap();
        assert_eq!(snapshot_from_grammar(&grammar).label, "1 production");
    }

    #[test]
    fn test_labels_are_escaped() {
        let grammar = parse("<a> ::= \"tab\\there\";").unwrap();
        let snapshot = snapshot_from_grammar(&grammar);
        assert_eq!(snapshot.children[0].children[0].label, "\"tab\\there\"");
    }
}
