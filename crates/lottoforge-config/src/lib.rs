//! Configuration system for LottoForge.
//!
//! Load the generator's attempt budget, random seed and named rule presets
//! from TOML or YAML files without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use lottoforge_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     max_attempts = 5000
//!     random_seed = 42
//!
//!     [[presets]]
//!     id = "low-sum-quina"
//!     name = "Quina low sums"
//!     lottery = "quina"
//!     [presets.rules]
//!     sum_range = [60, 150]
//!     max_consecutive = 1
//! "#).unwrap();
//!
//! assert_eq!(config.max_attempts, 5000);
//! let preset = config.preset("low-sum-quina").unwrap();
//! assert_eq!(preset.rules.max_consecutive, Some(1));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use lottoforge_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load_or_default("lottoforge.toml").unwrap();
//! // Proceeds with defaults if file doesn't exist
//! assert_eq!(config.max_attempts, 2000);
//! ```

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lottoforge_core::{RuleSet, DEFAULT_MAX_ATTEMPTS};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Main generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Attempt budget of each single-line search.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// User presets, looked up before the built-in ones.
    #[serde(default)]
    pub presets: Vec<PresetConfig>,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            random_seed: None,
            presets: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates a configuration file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
            });
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    ///
    /// A file that exists and is broken is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Adds a user preset.
    pub fn with_preset(mut self, preset: PresetConfig) -> Self {
        self.presets.push(preset);
        self
    }

    /// Checks user presets have unique ids and coherent rule sets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for preset in &self.presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate preset id '{}'",
                    preset.id
                )));
            }
            preset
                .rules
                .check_structure()
                .map_err(|e| ConfigError::Invalid(format!("preset '{}': {}", preset.id, e)))?;
        }
        Ok(())
    }

    /// Finds a preset by id, user presets first.
    pub fn preset(&self, id: &str) -> Result<PresetConfig, ConfigError> {
        self.all_presets()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))
    }

    /// User presets followed by built-in ones not overridden by id.
    pub fn all_presets(&self) -> Vec<PresetConfig> {
        let mut all = self.presets.clone();
        all.extend(
            default_presets()
                .into_iter()
                .filter(|d| !self.presets.iter().any(|p| p.id == d.id)),
        );
        all
    }

    /// Presets bound to `lottery`.
    pub fn presets_for(&self, lottery: &str) -> Vec<PresetConfig> {
        self.all_presets()
            .into_iter()
            .filter(|p| p.lottery == lottery)
            .collect()
    }
}

/// A named rule set for one lottery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PresetConfig {
    /// Stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Catalog slug of the lottery the rules were tuned for.
    pub lottery: String,

    /// Constraints applied when the preset is selected.
    #[serde(default)]
    pub rules: RuleSet,
}

impl PresetConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lottery: impl Into<String>,
        rules: RuleSet,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lottery: lottery.into(),
            rules,
        }
    }
}

/// Presets shipped with the generator.
pub fn default_presets() -> Vec<PresetConfig> {
    vec![
        PresetConfig::new(
            "balanced-mega",
            "Mega-Sena Balanced",
            "megasena",
            RuleSet::new()
                .with_sum_range(150, 220)
                .with_even_range(2, 4)
                .with_max_consecutive(2),
        ),
        PresetConfig::new(
            "odd-heavy-loto",
            "Lotofácil Odd Heavy",
            "lotofacil",
            RuleSet::new()
                .with_even_range(6, 7)
                .with_sum_range(180, 210),
        ),
    ]
}

#[cfg(test)]
mod tests;
