//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::{Path, PathBuf};

/// File name looked up in the working and config directories.
pub const CONFIG_FILE_NAME: &str = "kitchonomy.toml";

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, `None` for defaults
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; without one the standard locations are
    /// searched and defaults are used when none exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        tracing::debug!(path = ?config_path, "configuration loaded");
        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(format!(".{}", CONFIG_FILE_NAME)),
        PathBuf::from(CONFIG_FILE_NAME),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("kitchonomy").join(CONFIG_FILE_NAME));
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

/// Load, parse and validate a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
            .with_source(e)
    })?;

    let schema: ConfigSchema = toml::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse config file {}: {}", path.display(), e),
        )
        .with_source(e)
    })?;

    let result = schema.validate();
    if !result.is_valid() {
        let messages: Vec<String> = result.errors().iter().map(|e| e.to_string()).collect();
        return Err(Error::new(
            ErrorCode::ConfigValidationError,
            format!("Invalid config file {}: {}", path.display(), messages.join("; ")),
        ));
    }
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.display.suggestion_limit, 5);
        assert_eq!(config.schema.logging.level, "warn");
        assert!(config.schema.validate().is_valid());
    }

    #[test]
    fn test_config_load_explicit_file() {
        let file = write_config(
            r#"
            [general]
            seed_path = "household.json"

            [logging]
            level = "debug"
            json = true

            [display]
            suggestion_limit = 3
            "#,
        );

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.schema.general.seed_path.as_deref(), Some("household.json"));
        assert_eq!(config.schema.logging.level, "debug");
        assert!(config.schema.logging.json);
        assert_eq!(config.schema.display.suggestion_limit, 3);
        assert!(config.schema.display.color);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let file = write_config("[display]\ncolor = false\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.schema.display.color);
        assert_eq!(config.schema.logging, Default::default());
    }

    #[test]
    fn test_config_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/no/such/kitchonomy.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_invalid_values() {
        let file = write_config("[logging]\nlevel = \"chatty\"\n[display]\nsuggestion_limit = 0\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.message.contains("logging.level"));
        assert!(err.message.contains("display.suggestion_limit"));
    }

    #[test]
    fn test_config_parse_error() {
        let file = write_config("[display\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }
}
