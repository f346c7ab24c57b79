//! Configuration schema definitions

use crate::validation::{ValidationResult, Validator, LOG_LEVELS};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// `[general]` table
    #[serde(default)]
    pub general: GeneralConfig,

    /// `[logging]` table
    #[serde(default)]
    pub logging: LoggingConfig,

    /// `[display]` table
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ConfigSchema {
    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> ValidationResult {
        let mut result = Validator::new()
            .one_of("logging.level", &self.logging.level, LOG_LEVELS)
            .at_least("display.suggestion_limit", self.display.suggestion_limit, 1)
            .validate();

        if let Some(seed) = &self.general.seed_path {
            result.merge(Validator::new().required("general.seed_path", seed).validate());
        }
        result
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeneralConfig {
    /// Seed file loaded into the store; the built-in household when unset
    #[serde(default)]
    pub seed_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Number of recipes shown by `recipes suggest`
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            color: true,
        }
    }
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_true() -> bool {
    true
}
