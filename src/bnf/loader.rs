//! Loading grammar files
//!
//! Reads grammar source from a file (or stdin, given the path `-`) and parses it
//! with a fixed set of [`ParseOptions`]. Errors keep the path they came from so
//! tools can report them as `path:line:column: message`.

use crate::bnf::ast::Grammar;
use crate::bnf::parsing::{parse_reporting_trailing, ParseOptions, SyntaxError};
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// The path that selects standard input
pub const STDIN_PATH: &str = "-";

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Syntax { path: PathBuf, error: SyntaxError },
}

fn display_path(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Error reading {}: {}", display_path(path), source)
            }
            LoadError::Syntax { path, error } => write!(
                f,
                "{}:{}:{}: {}",
                display_path(path),
                error.line(),
                error.column(),
                error.message()
            ),
        }
    }
}

/// Input the permissive parser read past without complaint
///
/// Only produced when parsing is not strict; a strict loader reports the same
/// thing as a [`LoadError::Syntax`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingInputWarning {
    pub path: PathBuf,
    pub error: SyntaxError,
}

impl fmt::Display for TrailingInputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: warning: {}; the rest of the input is ignored",
            display_path(&self.path),
            self.error.line(),
            self.error.column(),
            self.error.message()
        )
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Syntax { error, .. } => Some(error),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GrammarLoader {
    options: ParseOptions,
}

impl GrammarLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Read raw source text from a file, or from stdin for `-`
    pub fn read_source(&self, path: impl AsRef<Path>) -> Result<String, LoadError> {
        let path = path.as_ref();
        let result = if path == Path::new(STDIN_PATH) {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).map(|_| source)
        } else {
            std::fs::read_to_string(path)
        };
        result.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse source text that was read from `path`
    pub fn parse_source(&self, path: impl AsRef<Path>, source: &str) -> Result<Grammar, LoadError> {
        self.parse_source_reporting(path, source)
            .map(|(grammar, _)| grammar)
    }

    /// Parse source text, also returning a warning if trailing input was ignored
    pub fn parse_source_reporting(
        &self,
        path: impl AsRef<Path>,
        source: &str,
    ) -> Result<(Grammar, Option<TrailingInputWarning>), LoadError> {
        let path = path.as_ref();
        let (grammar, trailing) =
            parse_reporting_trailing(source, &self.options).map_err(|error| LoadError::Syntax {
                path: path.to_path_buf(),
                error,
            })?;
        let warning = trailing.map(|error| TrailingInputWarning {
            path: path.to_path_buf(),
            error,
        });
        Ok((grammar, warning))
    }

    /// Read and parse a grammar file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Grammar, LoadError> {
        self.load_reporting(path).map(|(grammar, _)| grammar)
    }

    /// Read and parse a grammar file, also returning any trailing input warning
    pub fn load_reporting(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(Grammar, Option<TrailingInputWarning>), LoadError> {
        let path = path.as_ref();
        let source = self.read_source(path)?;
        self.parse_source_reporting(path, &source)
    }
}
