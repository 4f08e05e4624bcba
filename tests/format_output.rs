//! Output of the registered formats for small grammars

use prettybnf::bnf::formats::{FormatRegistry, TreevizFormatter};
use prettybnf::parse;

fn render(source: &str, format: &str) -> String {
    let grammar = parse(source).unwrap();
    FormatRegistry::with_defaults()
        .serialize(&grammar, format)
        .unwrap()
}

const GREETING: &str = "<greeting> ::= \"hello \" <name> | \"hi\";\n<name> ::= \"world\";";

#[test]
fn test_canonical_output() {
    let output = render("<greeting>::=\"hello \"   <name>\n  |\"hi\";  <name> ::= \"world\";", "canonical");
    assert_eq!(output, "<greeting> ::= \"hello \" <name> | \"hi\";\n<name> ::= \"world\";\n");
}

#[test]
fn test_treeviz_output() {
    insta::assert_snapshot!(render(GREETING, "treeviz"), @r#"
⧉ 2 productions
├─ ≔ <greeting>
│ ├─ ☰ "hello " <name>
│ │ ├─ ◦ "hello "
│ │ └─ ⊕ <name>
│ └─ ☰ "hi"
│   └─ ◦ "hi"
└─ ≔ <name>
  └─ ☰ "world"
    └─ ◦ "world"
"#);
}

#[test]
fn test_treeviz_truncates_long_labels() {
    let grammar = parse("<a> ::= \"abcdefghij\";").unwrap();
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(6));
    let output = registry.serialize(&grammar, "treeviz").unwrap();
    assert!(output.contains("◦ \"abcde...\n"), "{}", output);
}

#[test]
fn test_tag_output() {
    insta::assert_snapshot!(render("<a> ::= \"x<y\" | <b>;", "tag"), @r#"
<grammar>
  <production name="a">
    <expression>
      <terminal>x&lt;y</terminal>
    </expression>
    <expression>
      <nonterminal>b</nonterminal>
    </expression>
  </production>
</grammar>
"#);
}

#[test]
fn test_json_output() {
    let output = render("<a> ::= \"x\" <b>;", "json");
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "type": "grammar",
            "productions": [{
                "type": "production",
                "lhs": { "type": "nonterminal", "text": "a" },
                "rhs": [{
                    "type": "expression",
                    "terms": [
                        { "type": "terminal", "text": "x" },
                        { "type": "nonterminal", "text": "b" }
                    ]
                }]
            }]
        })
    );
}

#[test]
fn test_yaml_output() {
    let output = render("<a> ::= \"x\";", "yaml");
    assert!(output.contains("type: grammar"), "{}", output);
    assert!(output.contains("text: x"), "{}", output);
}

#[test]
fn test_unknown_format() {
    let grammar = parse("<a> ::= \"x\";").unwrap();
    let err = FormatRegistry::with_defaults()
        .serialize(&grammar, "dot")
        .unwrap_err();
    assert!(err.to_string().contains("dot"), "{}", err);
}
