//! Shared configuration loader for the qof toolchain.
//!
//! `defaults/qof.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QofConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use qof_babel::curriculum::{CurriculumEntry, CurriculumMap};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/qof.default.toml");

/// Top-level configuration consumed by qof applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QofConfig {
    pub convert: ConvertConfig,
    /// Curriculum override tables, keyed by question order. TOML table keys are
    /// strings; [`QofConfig::curriculum_map`] parses them into the decoder's map.
    pub curriculum: HashMap<String, CurriculumEntryConfig>,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

/// Mirrors one curriculum entry as written in configuration files.
#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumEntryConfig {
    pub subject: String,
    pub unit: String,
    pub topic: String,
}

impl From<CurriculumEntryConfig> for CurriculumEntry {
    fn from(config: CurriculumEntryConfig) -> Self {
        CurriculumEntry {
            subject: config.subject,
            unit: config.unit,
            topic: config.topic,
        }
    }
}

impl From<&CurriculumEntryConfig> for CurriculumEntry {
    fn from(config: &CurriculumEntryConfig) -> Self {
        CurriculumEntry {
            subject: config.subject.clone(),
            unit: config.unit.clone(),
            topic: config.topic.clone(),
        }
    }
}

impl QofConfig {
    /// Convert the `[curriculum]` tables into the decoder's override map.
    ///
    /// A table key that is not a question order is a configuration error rather
    /// than a silently dropped entry.
    pub fn curriculum_map(&self) -> Result<CurriculumMap, ConfigError> {
        let mut map = CurriculumMap::new();
        for (key, entry) in &self.curriculum {
            let order: u32 = key.parse().map_err(|_| {
                ConfigError::Message(format!(
                    "curriculum key '{key}' is not a question order"
                ))
            })?;
            map.insert(order, entry.into());
        }
        Ok(map)
    }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QofConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QofConfig, ConfigError> {
    Loader::new().build()
}
