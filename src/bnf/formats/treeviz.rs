//! Treeviz formatter for grammar trees
//!
//! Treeviz is a one-line-per-node view of the tree, handy for eyeballing how a
//! grammar was split into productions, alternatives and terms. Nesting is drawn
//! with box characters, 2 columns per level:
//!
//!     <prefix><connector> <icon> <label>   (label truncated)
//!
//! Example:
//!
//!     ⧉ 2 productions
//!     ├─ ≔ <greeting>
//!     │ ├─ ☰ "hello " <name>
//!     │ │ ├─ ◦ "hello "
//!     │ │ └─ ⊕ <name>
//!     │ └─ ☰ "hi"
//!     │   └─ ◦ "hi"
//!     └─ ≔ <name>
//!       └─ ☰ "world"
//!         └─ ◦ "world"
//!
//! Icons
//!     Grammar: ⧉
//!     Production: ≔
//!     Expression: ☰
//!     Terminal: ◦
//!     Nonterminal: ⊕

use super::registry::{FormatError, Formatter};
use crate::bnf::ast::{snapshot_from_grammar, AstSnapshot, Grammar};

pub const DEFAULT_MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Grammar" => "⧉",
        "Production" => "≔",
        "Expression" => "☰",
        "Terminal" => "◦",
        "Nonterminal" => "⊕",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    max_label_chars: usize,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, max_label_chars)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i == child_count - 1, max_label_chars, output);
    }
}

pub fn to_treeviz_str(grammar: &Grammar) -> String {
    to_treeviz_str_with_width(grammar, DEFAULT_MAX_LABEL_CHARS)
}

pub fn to_treeviz_str_with_width(grammar: &Grammar, max_label_chars: usize) -> String {
    let snapshot = snapshot_from_grammar(grammar);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, max_label_chars)
    );

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i == child_count - 1, max_label_chars, &mut output);
    }
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    max_label_chars: usize,
}

impl TreevizFormatter {
    pub fn new(max_label_chars: usize) -> Self {
        Self { max_label_chars }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LABEL_CHARS)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, grammar: &Grammar) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_width(grammar, self.max_label_chars))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}
