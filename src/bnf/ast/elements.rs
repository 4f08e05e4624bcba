//! Grammar elements
//!
//! Text held by [`Terminal`] and [`Nonterminal`] is always decoded: escape sequences
//! from the source (`\n`, `\t`, `\"`, `\\`) have already been resolved to the
//! characters they stand for. Re-escaping is the serializer's job.
//!
//! Elements serialize (via serde) to the same object shape the grammar notation has
//! always used for its parsed form: `{"type": "terminal", "text": "..."}` and so on.

use serde::Serialize;

/// A literal string, matched verbatim when a sentence is derived
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename = "terminal")]
pub struct Terminal {
    text: String,
}

impl Terminal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A rule name, expanded into one of the alternatives of its productions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename = "nonterminal")]
pub struct Nonterminal {
    text: String,
}

impl Nonterminal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Either kind of term that can appear on the right hand side of a production
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Term {
    Terminal(Terminal),
    Nonterminal(Nonterminal),
}

impl Term {
    pub fn terminal(text: impl Into<String>) -> Self {
        Term::Terminal(Terminal::new(text))
    }

    pub fn nonterminal(text: impl Into<String>) -> Self {
        Term::Nonterminal(Nonterminal::new(text))
    }

    /// The decoded text, whichever kind of term this is
    pub fn text(&self) -> &str {
        match self {
            Term::Terminal(t) => t.text(),
            Term::Nonterminal(n) => n.text(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Term::Terminal(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Term::Nonterminal(_))
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Term::Terminal(t) => Some(t),
            Term::Nonterminal(_) => None,
        }
    }

    pub fn as_nonterminal(&self) -> Option<&Nonterminal> {
        match self {
            Term::Nonterminal(n) => Some(n),
            Term::Terminal(_) => None,
        }
    }
}

impl From<Terminal> for Term {
    fn from(terminal: Terminal) -> Self {
        Term::Terminal(terminal)
    }
}

impl From<Nonterminal> for Term {
    fn from(nonterminal: Nonterminal) -> Self {
        Term::Nonterminal(nonterminal)
    }
}

/// One alternative: an ordered, non-empty sequence of terms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename = "expression")]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// Start an expression with its first term
    pub fn new(first: impl Into<Term>) -> Self {
        Self {
            terms: vec![first.into()],
        }
    }

    /// Append another term
    pub fn with_term(mut self, term: impl Into<Term>) -> Self {
        self.terms.push(term.into());
        self
    }

    /// Build from a list of terms; `None` if the list is empty
    pub fn from_terms(terms: Vec<Term>) -> Option<Self> {
        if terms.is_empty() {
            None
        } else {
            Some(Self { terms })
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A named rule with its ordered alternatives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename = "production")]
pub struct Production {
    lhs: Nonterminal,
    rhs: Vec<Expression>,
}

impl Production {
    /// Start a production with its first alternative
    pub fn new(lhs: Nonterminal, first: Expression) -> Self {
        Self {
            lhs,
            rhs: vec![first],
        }
    }

    /// Append another alternative
    pub fn with_alternative(mut self, alternative: Expression) -> Self {
        self.rhs.push(alternative);
        self
    }

    /// Build from a list of alternatives; `None` if the list is empty
    pub fn from_alternatives(lhs: Nonterminal, rhs: Vec<Expression>) -> Option<Self> {
        if rhs.is_empty() {
            None
        } else {
            Some(Self { lhs, rhs })
        }
    }

    /// The parser's expression list is never empty
    pub(crate) fn from_parsed(lhs: Nonterminal, rhs: Vec<Expression>) -> Self {
        debug_assert!(!rhs.is_empty(), "a production needs at least one alternative");
        Self { lhs, rhs }
    }

    pub fn lhs(&self) -> &Nonterminal {
        &self.lhs
    }

    /// The rule name (shorthand for `lhs().text()`)
    pub fn name(&self) -> &str {
        self.lhs.text()
    }

    pub fn rhs(&self) -> &[Expression] {
        &self.rhs
    }
}

/// The productions of one grammar definition, in source order
///
/// Several productions may share a name; they are kept as separate entries and
/// never merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename = "grammar")]
pub struct Grammar {
    productions: Vec<Production>,
}

impl Grammar {
    /// Start a grammar with its first production
    pub fn new(first: Production) -> Self {
        Self {
            productions: vec![first],
        }
    }

    /// Append another production
    pub fn with_production(mut self, production: Production) -> Self {
        self.productions.push(production);
        self
    }

    /// Build from a list of productions; `None` if the list is empty
    pub fn from_productions(productions: Vec<Production>) -> Option<Self> {
        if productions.is_empty() {
            None
        } else {
            Some(Self { productions })
        }
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// All productions whose left hand side is `name`, in source order
    pub fn productions_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Production> {
        self.productions.iter().filter(move |p| p.name() == name)
    }

    /// The first production, conventionally the start rule
    pub fn start(&self) -> &Production {
        &self.productions[0]
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Grammar {
    type Item = &'a Production;
    type IntoIter = std::slice::Iter<'a, Production>;

    fn into_iter(self) -> Self::IntoIter {
        self.productions.iter()
    }
}
