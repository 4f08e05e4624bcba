//! Output format lookup
//!
//! The CLI picks an output format by name at runtime, so every format is a
//! [`Formatter`] registered under its name. Names are kept in sorted order, which
//! is the order `prettybnf list-formats` prints them in.

use crate::bnf::ast::Grammar;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter is registered under `name`
    UnknownFormat { name: String, available: Vec<String> },
    /// The formatter could not render the grammar
    Serialization { format: String, message: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "Unknown format '{}' (available: {})",
                name,
                available.join(", ")
            ),
            FormatError::Serialization { format, message } => {
                write!(f, "Could not render {}: {}", format, message)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a whole grammar as text
pub trait Formatter: Send + Sync {
    /// Lookup name, as given to `--format`
    fn name(&self) -> &str;

    fn serialize(&self, grammar: &Grammar) -> Result<String, FormatError>;

    /// One line shown by `list-formats`
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Register a formatter, replacing any registered under the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `grammar` with the formatter registered as `format`
    pub fn serialize(&self, grammar: &Grammar, format: &str) -> Result<String, FormatError> {
        let formatter = self.get(format).ok_or_else(|| FormatError::UnknownFormat {
            name: format.to_string(),
            available: self.list_formats().iter().map(|n| n.to_string()).collect(),
        })?;
        formatter.serialize(grammar)
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    /// `(name, description)` pairs, sorted by name
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
    }

    /// The built-in formats: canonical, json, tag, treeviz and yaml
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::CanonicalFormatter);
        registry.register(super::TreevizFormatter::default());
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnf::parsing::parse;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _grammar: &Grammar) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    struct FailingFormatter;
    impl Formatter for FailingFormatter {
        fn name(&self) -> &str {
            "failing"
        }
        fn serialize(&self, _grammar: &Grammar) -> Result<String, FormatError> {
            Err(FormatError::Serialization {
                format: "failing".to_string(),
                message: "boom".to_string(),
            })
        }
    }

    fn grammar() -> Grammar {
        parse("<a> ::= \"x\";").unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert!(!registry.has("nonexistent"));
        assert_eq!(registry.get("test").map(|f| f.description()), Some("Test formatter"));
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert_eq!(registry.serialize(&grammar(), "test").unwrap(), "test output");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        match registry.serialize(&grammar(), "nonexistent") {
            Err(FormatError::UnknownFormat { name, available }) => {
                assert_eq!(name, "nonexistent");
                assert!(available.is_empty());
            }
            other => panic!("Expected UnknownFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_propagates_formatter_errors() {
        let mut registry = FormatRegistry::new();
        registry.register(FailingFormatter);
        assert_eq!(
            registry.serialize(&grammar(), "failing"),
            Err(FormatError::Serialization {
                format: "failing".to_string(),
                message: "boom".to_string(),
            })
        );
        // Formatters without a description fall back to an empty one
        assert_eq!(registry.get("failing").map(|f| f.description()), Some(""));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["canonical", "json", "tag", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatRegistry::with_defaults()
            .serialize(&grammar(), "dot")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown format 'dot' (available: canonical, json, tag, treeviz, yaml)"
        );

        let err = FormatError::Serialization {
            format: "yaml".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Could not render yaml: bad");
    }

    #[test]
    fn test_descriptions_follow_name_order() {
        let registry = FormatRegistry::with_defaults();
        let names: Vec<_> = registry.descriptions().map(|(name, _)| name).collect();
        assert_eq!(names, registry.list_formats());
        assert!(registry.descriptions().all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        registry.register(TestFormatter);

        assert_eq!(registry.list_formats().len(), 1);
    }
}
