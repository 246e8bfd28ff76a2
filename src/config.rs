//! Configuration loading
//!
//! `defaults/jsrc.default.toml` is embedded into the binary so documented
//! defaults and runtime behavior stay in sync. Callers layer their own files
//! and overrides on top via [`Loader`] before deserializing into
//! [`JsrcConfig`].

use crate::io::WriteOption;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/jsrc.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct JsrcConfig {
    pub packages: PackagesConfig,
    pub writing: WritingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackagesConfig {
    /// Suffix stripped when deriving a base package
    pub base_suffix: String,
}

/// Defaults for the class writer.
#[derive(Debug, Clone, Deserialize)]
pub struct WritingConfig {
    pub content_root: PathBuf,
    pub overwrite: bool,
    pub create_directories: bool,
    pub merge: bool,
}

impl WritingConfig {
    pub fn write_options(&self) -> Vec<WriteOption> {
        let mut options = Vec::new();
        if self.overwrite {
            options.push(WriteOption::OverwriteExisting);
        }
        if self.create_directories {
            options.push(WriteOption::CreateDirectories);
        }
        if self.merge {
            options.push(WriteOption::Merge);
        }
        options
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
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

    /// Layer an optional configuration file (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<JsrcConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<JsrcConfig, ConfigError> {
    Loader::new().build()
}
