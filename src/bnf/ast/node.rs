//! Borrowed view over any grammar element
//!
//! [`Node`] is the closed set of things that can be serialized or walked: the five
//! element kinds of the grammar tree. Code that needs to treat every element
//! uniformly (the canonical serializer, the snapshot builder) matches on it
//! exhaustively, so adding a kind is a compile error everywhere it matters.

use super::elements::{Expression, Grammar, Nonterminal, Production, Term, Terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Terminal(&'a Terminal),
    Nonterminal(&'a Nonterminal),
    Expression(&'a Expression),
    Production(&'a Production),
    Grammar(&'a Grammar),
}

impl<'a> Node<'a> {
    /// Name of the element kind (e.g. "Production")
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Terminal(_) => "Terminal",
            Node::Nonterminal(_) => "Nonterminal",
            Node::Expression(_) => "Expression",
            Node::Production(_) => "Production",
            Node::Grammar(_) => "Grammar",
        }
    }

    /// Direct children, in source order
    ///
    /// A production's children are its alternatives; its left hand side is the
    /// production's name rather than a child.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Terminal(_) | Node::Nonterminal(_) => Vec::new(),
            Node::Expression(expr) => expr.terms().iter().map(Node::from).collect(),
            Node::Production(production) => {
                production.rhs().iter().map(Node::Expression).collect()
            }
            Node::Grammar(grammar) => grammar
                .productions()
                .iter()
                .map(Node::Production)
                .collect(),
        }
    }
}

impl<'a> From<&'a Terminal> for Node<'a> {
    fn from(node: &'a Terminal) -> Self {
        Node::Terminal(node)
    }
}

impl<'a> From<&'a Nonterminal> for Node<'a> {
    fn from(node: &'a Nonterminal) -> Self {
        Node::Nonterminal(node)
    }
}

impl<'a> From<&'a Term> for Node<'a> {
    fn from(term: &'a Term) -> Self {
        match term {
            Term::Terminal(t) => Node::Terminal(t),
            Term::Nonterminal(n) => Node::Nonterminal(n),
        }
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(node: &'a Expression) -> Self {
        Node::Expression(node)
    }
}

impl<'a> From<&'a Production> for Node<'a> {
    fn from(node: &'a Production) -> Self {
        Node::Production(node)
    }
}

impl<'a> From<&'a Grammar> for Node<'a> {
    fn from(node: &'a Grammar) -> Self {
        Node::Grammar(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_converts_to_its_kind() {
        let t = Term::terminal("x");
        let n = Term::nonterminal("y");
        assert_eq!(Node::from(&t).node_type(), "Terminal");
        assert_eq!(Node::from(&n).node_type(), "Nonterminal");
    }

    #[test]
    fn test_production_children_are_alternatives() {
        let production = Production::new(Nonterminal::new("a"), Expression::new(Terminal::new("x")))
            .with_alternative(Expression::new(Terminal::new("y")));
        let kinds: Vec<_> = Node::from(&production)
            .children()
            .iter()
            .map(Node::node_type)
            .collect();
        assert_eq!(kinds, vec!["Expression", "Expression"]);
    }

    #[test]
    fn test_leaves_have_no_children() {
        let t = Terminal::new("x");
        assert!(Node::from(&t).children().is_empty());
    }
}
