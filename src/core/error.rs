//! Typed error handling for the shelf crate
//!
//! The browsing and input components themselves are total functions and
//! never fail; errors only arise at the edges, when parsing caller input
//! (URL-style sort expressions) or loading configuration files.
//!
//! # Error Categories
//!
//! - [`ConfigError`]: Errors related to settings parsing and loading
//! - [`QueryError`]: Errors related to URL-sourced query parameters

use std::fmt;

/// The main error type for the shelf crate
///
/// Each variant contains a more specific error type for that category.
#[derive(Debug)]
pub enum ShelfError {
    /// Configuration errors
    Config(ConfigError),

    /// Query parameter errors
    Query(QueryError),
}

impl fmt::Display for ShelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShelfError::Config(e) => write!(f, "{}", e),
            ShelfError::Query(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShelfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShelfError::Config(e) => Some(e),
            ShelfError::Query(e) => Some(e),
        }
    }
}

impl ShelfError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ShelfError::Config(e) => e.error_code(),
            ShelfError::Query(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to settings configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    ParseError { message: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { message } => {
                write!(f, "Failed to parse settings: {}", message)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }
}

impl From<ConfigError> for ShelfError {
    fn from(err: ConfigError) -> Self {
        ShelfError::Config(err)
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors related to URL-sourced query parameters
#[derive(Debug)]
pub enum QueryError {
    /// Sort column is not a recognized member of the enumeration
    UnknownSortColumn { column: String },

    /// Sort direction is neither "asc" nor "desc"
    UnknownSortDirection { direction: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownSortColumn { column } => {
                write!(f, "Unknown sort column: '{}'", column)
            }
            QueryError::UnknownSortDirection { direction } => {
                write!(f, "Unknown sort direction: '{}'", direction)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::UnknownSortColumn { .. } => "UNKNOWN_SORT_COLUMN",
            QueryError::UnknownSortDirection { .. } => "UNKNOWN_SORT_DIRECTION",
        }
    }
}

impl From<QueryError> for ShelfError {
    fn from(err: QueryError) -> Self {
        ShelfError::Query(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ShelfError {
    fn from(err: serde_yaml::Error) -> Self {
        ShelfError::Config(ConfigError::ParseError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for shelf operations
pub type ShelfResult<T> = Result<T, ShelfError>;

// =============================================================================
// Tests
// =============================================================================
