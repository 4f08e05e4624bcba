//! XML-like tag serialization
//!
//! Serializes the grammar tree to an XML-like format that directly reflects its
//! structure. Term text is written decoded (a terminal holding a tab shows an
//! actual tab), with the XML special characters escaped.
//!
//! ## Example
//!
//! ```text
//! <grammar>
//!   <production name="greeting">
//!     <expression>
//!       <terminal>hello </terminal>
//!       <nonterminal>name</nonterminal>
//!     </expression>
//!   </production>
//! </grammar>
//! ```

use super::registry::{FormatError, Formatter};
use crate::bnf::ast::{Grammar, Node};

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn nested(&mut self, open: &str, close: &str, children: Vec<Node<'_>>) {
        self.push_line(open);
        self.indent_level += 1;
        for child in children {
            self.visit(child);
        }
        self.indent_level -= 1;
        self.push_line(close);
    }

    fn visit(&mut self, node: Node<'_>) {
        match node {
            Node::Terminal(terminal) => {
                self.push_line(&format!("<terminal>{}</terminal>", escape_xml(terminal.text())))
            }
            Node::Nonterminal(nonterminal) => self.push_line(&format!(
                "<nonterminal>{}</nonterminal>",
                escape_xml(nonterminal.text())
            )),
            Node::Expression(_) => self.nested("<expression>", "</expression>", node.children()),
            Node::Production(production) => self.nested(
                &format!("<production name=\"{}\">", escape_xml(production.name())),
                "</production>",
                node.children(),
            ),
            Node::Grammar(_) => self.nested("<grammar>", "</grammar>", node.children()),
        }
    }
}

pub fn serialize_grammar_tag(grammar: &Grammar) -> String {
    let mut serializer = TagSerializer::new();
    serializer.visit(Node::Grammar(grammar));
    serializer.output
}

/// Formatter implementation for the tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, grammar: &Grammar) -> Result<String, FormatError> {
        Ok(serialize_grammar_tag(grammar))
    }

    fn description(&self) -> &str {
        "XML-like tag tree of productions, alternatives and terms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnf::parsing::parse;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_tag_layout() {
        let grammar = parse("<list> ::= \"<\" <items> \">\" | \"x\";").unwrap();
        let expected = "\
<grammar>
  <production name=\"list\">
    <expression>
      <terminal>&lt;</terminal>
      <nonterminal>items</nonterminal>
      <terminal>&gt;</terminal>
    </expression>
    <expression>
      <terminal>x</terminal>
    </expression>
  </production>
</grammar>
";
        assert_eq!(serialize_grammar_tag(&grammar), expected);
    }
}
