//! Record and configuration validation
//!
//! Caller-supplied records (seed files, store edits) are checked here before
//! they reach the classifier or the store. A failed check becomes an
//! [`ErrorCode::InvalidInput`] error instead of a silently coerced value.
//!
//! # Example
//!
//! ```rust
//! use kitchonomy_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "牛乳")
//!     .non_negative("quantity", 20.0)
//!     .range("rating", 4.8, 0.0, 5.0)
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use crate::model::{Recipe, ShoppingItem, StockItem};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Recipe categories double as facet ids, so they stay machine-friendly.
static CATEGORY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("category id pattern is valid"));

/// Maximum length of any display name.
pub const MAX_NAME_LENGTH: usize = 120;

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to Result type; failures are reported as invalid input.
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::InvalidInput,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    fn fail(
        mut self,
        field: &str,
        code: &str,
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    ) -> Self {
        self.result.add_error(ValidationError {
            field: field.to_string(),
            message,
            code: code.to_string(),
            expected,
            actual,
        });
        self
    }

    /// Validate that a field is not empty
    pub fn required(self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            return self.fail(
                field,
                "REQUIRED",
                "Field is required".to_string(),
                Some("non-empty value".to_string()),
                Some("empty".to_string()),
            );
        }
        self
    }

    /// Validate maximum length in characters
    pub fn max_length(self, field: &str, value: &str, max: usize) -> Self {
        let len = value.chars().count();
        if len > max {
            return self.fail(
                field,
                "MAX_LENGTH",
                format!("Must be at most {} characters", max),
                Some(format!("<= {} chars", max)),
                Some(format!("{} chars", len)),
            );
        }
        self
    }

    /// Validate against a compiled regex
    pub fn pattern(self, field: &str, value: &str, re: &Regex, description: &str) -> Self {
        if !re.is_match(value) {
            return self.fail(
                field,
                "PATTERN",
                format!("Must match {}", description),
                Some(description.to_string()),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate that a value is in a list of allowed values
    pub fn one_of(self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !allowed.contains(&value) {
            return self.fail(
                field,
                "ONE_OF",
                format!("Must be one of: {}", allowed.join(", ")),
                Some(allowed.join(", ")),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate a numeric range (inclusive)
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn range<T: PartialOrd + std::fmt::Display>(
        self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        // Written as a negated containment so NaN fails too.
        if !(value >= min && value <= max) {
            return self.fail(
                field,
                "RANGE",
                format!("Must be between {} and {}", min, max),
                Some(format!("{} - {}", min, max)),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate a lower bound
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn at_least<T: PartialOrd + std::fmt::Display>(self, field: &str, value: T, min: T) -> Self {
        if !(value >= min) {
            return self.fail(
                field,
                "AT_LEAST",
                format!("Must be at least {}", min),
                Some(format!(">= {}", min)),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate that a quantity is finite and not negative
    pub fn non_negative(self, field: &str, value: f64) -> Self {
        if !value.is_finite() || value < 0.0 {
            return self.fail(
                field,
                "NON_NEGATIVE",
                "Must be a finite number >= 0".to_string(),
                Some(">= 0".to_string()),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Add a custom validation
    pub fn custom<F>(self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        match f() {
            Some(message) => self.fail(field, "CUSTOM", message, None, None),
            None => self,
        }
    }

    /// Add a warning (non-blocking)
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

/// Validate a stock item
pub fn validate_stock_item(item: &StockItem) -> ValidationResult {
    let purchase_after_expiry = matches!(
        (item.purchase_date, item.expiry_date),
        (Some(purchased), Some(expires)) if purchased > expires
    );

    Validator::new()
        .required("name", &item.name)
        .max_length("name", &item.name, MAX_NAME_LENGTH)
        .required("category", &item.category)
        .non_negative("quantity", item.quantity)
        .warn_if(
            "purchase_date",
            purchase_after_expiry,
            "Purchased after the expiry date",
        )
        .validate()
}

/// Validate a shopping list entry
pub fn validate_shopping_item(item: &ShoppingItem) -> ValidationResult {
    Validator::new()
        .required("name", &item.name)
        .max_length("name", &item.name, MAX_NAME_LENGTH)
        .required("category", &item.category)
        .validate()
}

/// Validate a recipe catalog entry
pub fn validate_recipe(recipe: &Recipe) -> ValidationResult {
    let blank_ingredient = recipe
        .ingredients
        .iter()
        .position(|ingredient| ingredient.trim().is_empty());

    Validator::new()
        .required("name", &recipe.name)
        .max_length("name", &recipe.name, MAX_NAME_LENGTH)
        .pattern(
            "category",
            &recipe.category,
            &CATEGORY_ID,
            "a lower-case category id",
        )
        .at_least("servings", recipe.servings, 1)
        .range("rating", recipe.rating, 0.0, 5.0)
        .custom("ingredients", || {
            blank_ingredient.map(|index| format!("Ingredient #{} is blank", index + 1))
        })
        .validate()
}

/// Names of the log levels accepted in configuration files.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
