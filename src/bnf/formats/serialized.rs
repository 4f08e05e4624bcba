//! Data formats (JSON, YAML)
//!
//! Both emit the serde form of the tree, where every element is an object tagged
//! with its `type` and term text is decoded.

use super::registry::{FormatError, Formatter};
use crate::bnf::ast::Grammar;

fn serialization_error(format: &str, error: impl std::fmt::Display) -> FormatError {
    FormatError::Serialization {
        format: format.to_string(),
        message: error.to_string(),
    }
}

/// Formatter implementation for pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, grammar: &Grammar) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(grammar)
            .map_err(|e| serialization_error("json", e))?;
        json.push('\n');
        Ok(json)
    }

    fn description(&self) -> &str {
        "Grammar tree as JSON objects tagged by type"
    }
}

/// Formatter implementation for YAML
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, grammar: &Grammar) -> Result<String, FormatError> {
        serde_yaml::to_string(grammar).map_err(|e| serialization_error("yaml", e))
    }

    fn description(&self) -> &str {
        "Grammar tree as YAML mappings tagged by type"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnf::parsing::parse;

    #[test]
    fn test_json_output_is_tagged() {
        let grammar = parse("<a> ::= \"x\\ty\";").unwrap();
        let json = JsonFormatter.serialize(&grammar).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "grammar");
        assert_eq!(value["productions"][0]["lhs"]["text"], "a");
        assert_eq!(value["productions"][0]["rhs"][0]["terms"][0]["type"], "terminal");
        assert_eq!(value["productions"][0]["rhs"][0]["terms"][0]["text"], "x\ty");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_yaml_output_is_tagged() {
        let grammar = parse("<a> ::= <b>;").unwrap();
        let yaml = YamlFormatter.serialize(&grammar).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(value["type"].as_str(), Some("grammar"));
        assert_eq!(
            value["productions"][0]["rhs"][0]["terms"][0]["type"].as_str(),
            Some("nonterminal")
        );
    }
}
