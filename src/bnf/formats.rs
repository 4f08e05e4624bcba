//! Output formats for grammar trees
//!
//! `canonical` is the exact inverse of the parser. The other formats exist for
//! inspection and for handing the parsed tree to other tools.

pub mod canonical;
pub mod registry;
pub mod serialized;
pub mod tag;
pub mod treeviz;

pub use canonical::{escape, stringify, CanonicalFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_grammar_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width, TreevizFormatter};
