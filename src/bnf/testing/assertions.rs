//! Fluent assertions over grammar trees

use crate::bnf::ast::{Expression, Grammar, Production, Term};
use crate::bnf::formats::canonical::stringify;

fn summarize_productions(productions: &[Production]) -> String {
    productions
        .iter()
        .map(|p| format!("<{}>", p.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct GrammarAssertion<'a> {
    pub(crate) grammar: &'a Grammar,
}

impl<'a> GrammarAssertion<'a> {
    /// Assert the number of productions
    pub fn production_count(self, expected: usize) -> Self {
        let actual = self.grammar.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} productions, found {}: [{}]",
            expected,
            actual,
            summarize_productions(self.grammar.productions())
        );
        self
    }

    /// Assert the production names, in order
    pub fn production_names(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.grammar.productions().iter().map(Production::name).collect();
        assert_eq!(actual, expected, "Production names differ");
        self
    }

    /// Assert on a specific production by index
    pub fn production<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ProductionAssertion<'a>),
    {
        assert!(
            index < self.grammar.len(),
            "Production index {} out of bounds (grammar has {} productions)",
            index,
            self.grammar.len()
        );
        let production = &self.grammar.productions()[index];
        assertion(ProductionAssertion {
            production,
            context: format!("productions[{}]", index),
        });
        self
    }

    /// Assert the canonical text of the whole grammar
    pub fn canonical(self, expected: &str) -> Self {
        assert_eq!(stringify(self.grammar), expected, "Canonical text differs");
        self
    }
}

pub struct ProductionAssertion<'a> {
    production: &'a Production,
    context: String,
}

impl<'a> ProductionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.production.name(),
            expected,
            "{}: Expected production <{}>, found <{}>",
            self.context,
            expected,
            self.production.name()
        );
        self
    }

    pub fn alternative_count(self, expected: usize) -> Self {
        let actual = self.production.rhs().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} alternatives, found {} in {}",
            self.context, expected, actual, stringify(self.production)
        );
        self
    }

    pub fn alternative<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let rhs = self.production.rhs();
        assert!(
            index < rhs.len(),
            "{}: Alternative index {} out of bounds (production has {} alternatives)",
            self.context,
            index,
            rhs.len()
        );
        assertion(ExpressionAssertion {
            expression: &rhs[index],
            context: format!("{}:rhs[{}]", self.context, index),
        });
        self
    }

    /// Assert the canonical text of each alternative, in order
    pub fn alternatives(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.production.rhs().iter().map(|e| stringify(e)).collect();
        assert_eq!(actual, expected, "{}: Alternatives differ", self.context);
        self
    }
}

pub struct ExpressionAssertion<'a> {
    expression: &'a Expression,
    context: String,
}

impl<'a> ExpressionAssertion<'a> {
    pub fn term_count(self, expected: usize) -> Self {
        let actual = self.expression.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} terms, found {} in {}",
            self.context, expected, actual, stringify(self.expression)
        );
        self
    }

    fn term(&self, index: usize) -> &'a Term {
        let expression: &'a Expression = self.expression;
        let terms = expression.terms();
        assert!(
            index < terms.len(),
            "{}: Term index {} out of bounds (expression has {} terms)",
            self.context,
            index,
            terms.len()
        );
        &terms[index]
    }

    /// Assert the term at `index` is a terminal with the given decoded text
    pub fn terminal(self, index: usize, text: &str) -> Self {
        let term = self.term(index);
        assert_eq!(
            term.as_terminal().map(|t| t.text()),
            Some(text),
            "{}:terms[{}]: Expected terminal {:?}, found {}",
            self.context,
            index,
            text,
            stringify(term)
        );
        self
    }

    /// Assert the term at `index` is a nonterminal with the given name
    pub fn nonterminal(self, index: usize, name: &str) -> Self {
        let term = self.term(index);
        assert_eq!(
            term.as_nonterminal().map(|n| n.text()),
            Some(name),
            "{}:terms[{}]: Expected nonterminal <{}>, found {}",
            self.context,
            index,
            name,
            stringify(term)
        );
        self
    }
}
