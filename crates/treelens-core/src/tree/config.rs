use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::{
    render::{PrintMode, RenderOptions},
    similarity::{Matcher, SIMILARITY_THRESHOLD, SequenceRatio},
    style::Style,
};

const DEFAULT_DEBUGGER_CONFIG_YAML: &str = include_str!("../../config/debugger.default.yaml");

/// Display and addressing settings for a debugging session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebuggerConfig {
    pub similarity_threshold: f64,
    pub print_mode: PrintMode,
    pub max_depth: Option<usize>,
    pub preferred_max_depth: Option<usize>,
    pub color: bool,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        DebuggerConfig {
            similarity_threshold: SIMILARITY_THRESHOLD,
            print_mode: PrintMode::Summary,
            max_depth: None,
            preferred_max_depth: None,
            color: true,
        }
    }
}

impl DebuggerConfig {
    /// Parse a debugger config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: DebuggerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a debugger config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_DEBUGGER_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, ConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.similarity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.similarity_threshold)
        {
            return Err(ConfigError::Invalid(
                "similarity_threshold must be within [0, 1]".to_string(),
            ));
        }
        if self.preferred_max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "preferred_max_depth must be greater than 0 when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(SequenceRatio, self.similarity_threshold)
    }

    pub fn style(&self) -> Style {
        Style::new(self.color)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.max_depth, self.print_mode)
    }
}

/// Error type for loading and validating `DebuggerConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid debugger config: {0}")]
    Invalid(String),
}
