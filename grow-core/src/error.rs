//! Error types for content operations
//!
//! Lookups never produce errors: a slug that matches nothing is an ordinary
//! `None`. `ContentError` covers everything that happens before lookups can
//! run (loading and parsing authored content, configuration, strict duplicate
//! detection) and gives each failure:
//! - A stable error code for programmatic handling
//! - A category for grouping
//! - An HTTP status code for the route layer
//!
//! # Example
//!
//! ```rust
//! use grow_core::error::{ContentError, ErrorCategory};
//!
//! let err = ContentError::DuplicateSlug {
//!     collection: "state".to_string(),
//!     key: "texas".to_string(),
//! };
//! assert_eq!(err.error_code(), "DUPLICATE_SLUG");
//! assert_eq!(err.category(), ErrorCategory::Conflict);
//! assert_eq!(err.http_status_code(), 409);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Resource not found (404)
    NotFound,
    /// Input validation failed (400)
    Validation,
    /// Conflicting authored data (409)
    Conflict,
    /// Internal error (500)
    Internal,
    /// File system or parse failure outside our control (502)
    External,
}

/// Errors that can occur while loading or serving content
#[derive(Error, Debug)]
pub enum ContentError {
    // ═══════════════════════════════════════════════════════════════════════
    // Content errors (authored records and their files)
    // ═══════════════════════════════════════════════════════════════════════

    /// A content file or directory could not be read
    #[error("Failed to load content from '{path}': {reason}")]
    ContentLoadError { path: String, reason: String },

    /// A content record is malformed or missing required fields
    #[error("Invalid content in '{source_name}': {reason}")]
    InvalidContent { source_name: String, reason: String },

    /// Two entities in one collection share a key (strict mode only)
    #[error("Duplicate {collection} slug: '{key}'. Each slug must be unique within its collection.")]
    DuplicateSlug { collection: String, key: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Route and template errors
    // ═══════════════════════════════════════════════════════════════════════

    /// A page template name is not known
    #[error("Unknown page template: '{name}'. Use 'state', 'lane' or a template file.")]
    UnknownTemplate { name: String },

    /// A named collection does not exist
    #[error("Unknown collection: '{name}'")]
    UnknownCollection { name: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Configuration errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Configuration value is invalid
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Infrastructure errors
    // ═══════════════════════════════════════════════════════════════════════

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl ContentError {
    /// Returns true if this error is a client error (4xx equivalent)
    pub fn is_client_error(&self) -> bool {
        matches!(self.http_status_code(), 400..=499)
    }

    /// Returns true if this error is a server error (5xx equivalent)
    pub fn is_server_error(&self) -> bool {
        matches!(self.http_status_code(), 500..=599)
    }

    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContentError::UnknownTemplate { .. } | ContentError::UnknownCollection { .. } => {
                ErrorCategory::NotFound
            }

            ContentError::InvalidContent { .. } | ContentError::InvalidConfig { .. } => {
                ErrorCategory::Validation
            }

            ContentError::DuplicateSlug { .. } => ErrorCategory::Conflict,

            ContentError::ContentLoadError { .. }
            | ContentError::JsonError(_)
            | ContentError::IoError { .. } => ErrorCategory::External,
        }
    }

    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::ContentLoadError { .. } => "CONTENT_LOAD_ERROR",
            ContentError::InvalidContent { .. } => "INVALID_CONTENT",
            ContentError::DuplicateSlug { .. } => "DUPLICATE_SLUG",
            ContentError::UnknownTemplate { .. } => "UNKNOWN_TEMPLATE",
            ContentError::UnknownCollection { .. } => "UNKNOWN_COLLECTION",
            ContentError::InvalidConfig { .. } => "INVALID_CONFIG",
            ContentError::JsonError(_) => "JSON_ERROR",
            ContentError::IoError { .. } => "IO_ERROR",
        }
    }

    /// Returns the HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client sent invalid data
            ContentError::InvalidContent { .. } | ContentError::InvalidConfig { .. } => 400,

            // 404 Not Found
            ContentError::UnknownTemplate { .. } | ContentError::UnknownCollection { .. } => 404,

            // 409 Conflict
            ContentError::DuplicateSlug { .. } => 409,

            // 502 Bad Gateway - file system or parse failure
            ContentError::ContentLoadError { .. }
            | ContentError::JsonError(_)
            | ContentError::IoError { .. } => 502,
        }
    }

    /// Converts this error to a JSON-serializable response object
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                category: self.category(),
            },
        }
    }
}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::IoError {
            message: err.to_string(),
        }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail for JSON responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code (e.g., "DUPLICATE_SLUG")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Error category
    pub category: ErrorCategory,
}
