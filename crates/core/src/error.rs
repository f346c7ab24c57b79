//! Structured error handling with codes, context and suggestions
//!
//! Every failure the core can report carries:
//! - an [`ErrorCode`] for programmatic handling
//! - optional context describing what was being done
//! - an optional recovery suggestion
//! - a serialisable [`ErrorReport`] for JSON output

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric failure codes, grouped by the thousands digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Any other IO failure
    IoError = 2000,
    /// A named file does not exist
    FileNotFound = 2001,
    /// A named file cannot be read
    PermissionDenied = 2002,

    /// The config file could not be read
    ConfigError = 3000,
    /// An explicit `--config` path does not exist
    ConfigNotFound = 3001,
    /// The config file is not valid TOML for the schema
    ConfigParseError = 3002,
    /// The config file holds out-of-range values
    ConfigValidationError = 3003,

    /// The seed file is not valid JSON for the record layout
    SeedParseError = 4001,
    /// Two seed records of one kind share an id
    DuplicateId = 4002,

    /// A caller-supplied record or argument breaks a precondition
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            4 => "Seed",
            6 => "Validation",
            _ => "Other",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// True for precondition violations in caller-supplied records.
    pub fn is_invalid_input(&self) -> bool {
        self.code == ErrorCode::InvalidInput
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    /// A file that does not exist.
    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check that the file exists and you have read permissions")
    }

    /// The config file could not be read.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// An explicit config path that does not exist.
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a kitchonomy.toml file or use --config to specify a path")
    }

    /// Two seed records of `kind` share `id`.
    pub fn duplicate_id(kind: &str, id: u64) -> Self {
        Self::new(ErrorCode::DuplicateId, format!("Duplicate {} id: {}", kind, id))
            .with_suggestion("Give every record in a section a unique id")
    }

    /// A precondition violation.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A negative or non-finite stock quantity.
    pub fn invalid_quantity(name: &str, quantity: f64) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Invalid quantity {} for stock item '{}'", quantity, name),
        )
        .with_suggestion("Quantities must be finite and not negative")
    }

    /// A date string that is not `YYYY-MM-DD`.
    pub fn invalid_date(field: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Unparsable {}: '{}'", field, value),
        )
        .with_suggestion("Use the YYYY-MM-DD format")
    }
}

/// Error as printed on stderr under `--format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Variant name, e.g. `INVALID_INPUT`
    pub code: ErrorCode,
    /// Display form, e.g. `E6001`
    pub code_str: String,
    /// Group of the code
    pub category: String,
    /// What went wrong
    pub message: String,
    /// What was being done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// How to recover
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Display form of the underlying error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command finished
    pub const SUCCESS: i32 = 0;
    /// IO or any other failure
    pub const FAILURE: i32 = 1;
    /// Rejected input (`E6xxx`)
    pub const VALIDATION_ERROR: i32 = 2;
    /// Unusable config file (`E3xxx`)
    pub const CONFIG_ERROR: i32 = 3;
    /// Unusable seed file (`E4xxx`)
    pub const SEED_ERROR: i32 = 4;
}

impl Error {
    /// Exit code a CLI should use when this error ends the process.
    pub fn exit_code(&self) -> i32 {
        match self.code.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            4 => exit_codes::SEED_ERROR,
            6 => exit_codes::VALIDATION_ERROR,
            _ => exit_codes::FAILURE,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::SeedParseError, format!("JSON parse error: {}", err))
            .with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach what was being done.
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery hint.
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}
