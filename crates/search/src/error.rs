//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building a search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A category facet that names no category
    #[error("Invalid category facet: {0:?}")]
    InvalidFacet(String),
}

/// Error code for integration with kitchonomy-core error handling.
/// Range: 7xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// A category facet that names no category
    InvalidFacet = 7001,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidFacet(_) => SearchErrorCode::InvalidFacet,
        }
    }
}

impl From<SearchError> for kitchonomy_core::Error {
    fn from(err: SearchError) -> Self {
        kitchonomy_core::Error::invalid_input(err.to_string())
            .with_suggestion("Use \"all\" or a category id such as \"japanese\"")
            .with_source(err)
    }
}
