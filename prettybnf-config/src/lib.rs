//! Shared configuration loader for the prettybnf tools.
//!
//! `defaults/prettybnf.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`PrettyBnfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/prettybnf.default.toml");

/// Top-level configuration consumed by prettybnf applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PrettyBnfConfig {
    pub parsing: ParsingConfig,
    pub inspect: InspectConfig,
}

/// Parser behavior knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub strict: bool,
}

/// Controls `inspect` output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: String,
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub max_label_chars: usize,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PrettyBnfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PrettyBnfConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(!config.parsing.strict);
        assert_eq!(config.inspect.format, "treeviz");
        assert_eq!(config.inspect.treeviz.max_label_chars, 30);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.strict", true)
            .expect("override to apply")
            .set_override("inspect.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.parsing.strict);
        assert_eq!(config.inspect.format, "json");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp file");
        writeln!(file, "[inspect.treeviz]\nmax_label_chars = 12").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.treeviz.max_label_chars, 12);
        // Untouched keys keep their defaults
        assert_eq!(config.inspect.format, "treeviz");
    }

    #[test]
    fn later_files_win() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let base = dir.path().join("base.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(&base, "[inspect]\nformat = \"tag\"\n").expect("write base");
        std::fs::write(&local, "[inspect]\nformat = \"json\"\n").expect("write local");

        let config = Loader::new()
            .with_file(&base)
            .with_optional_file(&local)
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, "json");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist/prettybnf.toml")
            .build()
            .expect("config to build");
        assert!(!config.parsing.strict);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("does/not/exist/prettybnf.toml")
            .build();
        assert!(result.is_err());
    }
}
