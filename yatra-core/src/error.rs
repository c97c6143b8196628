//! Error types for Yatra operations
//!
//! This module provides a comprehensive error handling system with:
//! - Structured error types with descriptive messages
//! - Error codes for programmatic handling
//! - HTTP status code mapping for server integrations
//! - Error categories for grouping and filtering
//! - JSON serialization for API responses
//!
//! # Error Codes
//!
//! Each error variant has a unique, stable error code (e.g., `TRIP_NOT_FOUND`)
//! that can be used for:
//! - Internationalization (i18n) - map codes to localized messages
//! - Client handling - switch on error codes for specific behaviors
//! - Logging and monitoring - aggregate errors by code
//!
//! # Example
//!
//! ```rust
//! use yatra_core::error::{YatraError, ErrorCategory};
//!
//! fn handle_error(err: YatraError) {
//!     // Check error category
//!     match err.category() {
//!         ErrorCategory::NotFound => println!("Resource not found"),
//!         ErrorCategory::Validation => println!("Invalid input"),
//!         ErrorCategory::Unavailable => println!("Backend unavailable"),
//!         _ => println!("Other error"),
//!     }
//!
//!     // Get HTTP status for API response
//!     let status = err.http_status_code();
//!
//!     // Check if retry might help
//!     if err.is_recoverable() {
//!         println!("Retry may succeed");
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Yatra operations
pub type Result<T> = std::result::Result<T, YatraError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Resource not found (404)
    NotFound,
    /// Input validation failed (400)
    Validation,
    /// Resource conflict (409)
    Conflict,
    /// Backend temporarily unavailable (503)
    Unavailable,
    /// Internal server error (500)
    Internal,
    /// External dependency error (502)
    External,
}

/// Errors that can occur in Yatra operations
///
/// All errors include:
/// - A human-readable error message
/// - A stable error code for programmatic handling
/// - A category for grouping
/// - An HTTP status code for server integrations
#[derive(Error, Debug)]
pub enum YatraError {
    // ═══════════════════════════════════════════════════════════════════════
    // Lookup errors (slug-addressed content records)
    // ═══════════════════════════════════════════════════════════════════════

    /// Trip with the specified slug doesn't exist
    #[error("Trip not found: '{slug}'. Verify the slug or insert the trip first.")]
    TripNotFound { slug: String },

    /// Blog post with the specified slug doesn't exist
    #[error("Post not found: '{slug}'. Verify the slug or insert the post first.")]
    PostNotFound { slug: String },

    /// Tag with the specified slug doesn't exist
    #[error("Tag not found: '{slug}'")]
    TagNotFound { slug: String },

    /// Region with the specified slug doesn't exist
    #[error("Region not found: '{slug}'")]
    RegionNotFound { slug: String },

    /// Team member with the specified slug doesn't exist
    #[error("Team member not found: '{slug}'")]
    MemberNotFound { slug: String },

    /// Glossary term with the specified slug doesn't exist
    #[error("Glossary term not found: '{slug}'")]
    TermNotFound { slug: String },

    /// Blog category with the specified slug doesn't exist
    #[error("Blog category not found: '{slug}'")]
    CategoryNotFound { slug: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Record validation and insertion errors
    // ═══════════════════════════════════════════════════════════════════════

    /// A record failed structural validation before insertion
    #[error("Invalid {entity} record: {reason}")]
    InvalidRecord { entity: String, reason: String },

    /// Attempted to insert a record whose slug is already taken
    #[error("Duplicate {entity} slug: '{slug}'. Slugs must be unique within a collection.")]
    DuplicateSlug { entity: String, slug: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Registry and store errors (glossary auto-linking path)
    // ═══════════════════════════════════════════════════════════════════════

    /// The content store could not be reached during a registry load
    #[error("Content store unavailable: {reason}. The auto-link pass should be skipped for this render.")]
    StoreUnavailable { reason: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Seed data errors (bulk content loading)
    // ═══════════════════════════════════════════════════════════════════════

    /// Failed to read a seed data file
    #[error("Failed to load seed data from '{path}': {reason}")]
    SeedLoadError { path: String, reason: String },

    /// Seed data parsed but contains invalid content
    #[error("Invalid seed data: {reason}")]
    InvalidSeedData { reason: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Infrastructure errors (serialization, storage, I/O)
    // ═══════════════════════════════════════════════════════════════════════

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Store lock is poisoned (panic occurred while holding lock)
    #[error("Content store lock poisoned. This is a bug; please report it.")]
    StoreLocked,

    /// I/O operation failed
    #[error("IO error: {message}")]
    IoError { message: String },

    /// Internal error that shouldn't happen
    #[error("Internal error: {reason}. This is a bug; please report it.")]
    InternalError { reason: String },
}

impl YatraError {
    /// Returns true if this error might succeed on retry
    ///
    /// Recoverable errors include:
    /// - Store unavailability (backend may come back)
    /// - Store locks (rare, indicates contention)
    ///
    /// Non-recoverable errors include:
    /// - Not found errors (need different input)
    /// - Validation errors (need correct input)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            YatraError::StoreUnavailable { .. } | YatraError::StoreLocked
        )
    }

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
            // Not found
            YatraError::TripNotFound { .. }
            | YatraError::PostNotFound { .. }
            | YatraError::TagNotFound { .. }
            | YatraError::RegionNotFound { .. }
            | YatraError::MemberNotFound { .. }
            | YatraError::TermNotFound { .. }
            | YatraError::CategoryNotFound { .. } => ErrorCategory::NotFound,

            // Validation
            YatraError::InvalidRecord { .. }
            | YatraError::InvalidSeedData { .. } => ErrorCategory::Validation,

            // Conflict
            YatraError::DuplicateSlug { .. } => ErrorCategory::Conflict,

            // Unavailable
            YatraError::StoreUnavailable { .. } => ErrorCategory::Unavailable,

            // Internal
            YatraError::StoreLocked
            | YatraError::InternalError { .. } => ErrorCategory::Internal,

            // External (I/O, JSON, file loading)
            YatraError::SeedLoadError { .. }
            | YatraError::JsonError(_)
            | YatraError::IoError { .. } => ErrorCategory::External,
        }
    }

    /// Returns the stable error code for this error
    ///
    /// Error codes are uppercase, underscore-separated identifiers that
    /// remain stable across versions. Use these for:
    /// - Internationalization (mapping to translated messages)
    /// - Client-side error handling
    /// - Logging and alerting
    pub fn error_code(&self) -> &'static str {
        match self {
            YatraError::TripNotFound { .. } => "TRIP_NOT_FOUND",
            YatraError::PostNotFound { .. } => "POST_NOT_FOUND",
            YatraError::TagNotFound { .. } => "TAG_NOT_FOUND",
            YatraError::RegionNotFound { .. } => "REGION_NOT_FOUND",
            YatraError::MemberNotFound { .. } => "MEMBER_NOT_FOUND",
            YatraError::TermNotFound { .. } => "TERM_NOT_FOUND",
            YatraError::CategoryNotFound { .. } => "CATEGORY_NOT_FOUND",
            YatraError::InvalidRecord { .. } => "INVALID_RECORD",
            YatraError::DuplicateSlug { .. } => "DUPLICATE_SLUG",
            YatraError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            YatraError::SeedLoadError { .. } => "SEED_LOAD_ERROR",
            YatraError::InvalidSeedData { .. } => "INVALID_SEED_DATA",
            YatraError::JsonError(_) => "JSON_ERROR",
            YatraError::StoreLocked => "STORE_LOCKED",
            YatraError::IoError { .. } => "IO_ERROR",
            YatraError::InternalError { .. } => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code for this error
    ///
    /// Use this when building HTTP API responses. Maps errors to
    /// appropriate HTTP status codes following REST conventions.
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client sent invalid data
            YatraError::InvalidRecord { .. }
            | YatraError::InvalidSeedData { .. } => 400,

            // 404 Not Found - Resource doesn't exist
            YatraError::TripNotFound { .. }
            | YatraError::PostNotFound { .. }
            | YatraError::TagNotFound { .. }
            | YatraError::RegionNotFound { .. }
            | YatraError::MemberNotFound { .. }
            | YatraError::TermNotFound { .. }
            | YatraError::CategoryNotFound { .. } => 404,

            // 409 Conflict - Resource state conflict
            YatraError::DuplicateSlug { .. } => 409,

            // 500 Internal Server Error - Our fault
            YatraError::StoreLocked
            | YatraError::InternalError { .. } => 500,

            // 502 Bad Gateway - External dependency failed
            YatraError::SeedLoadError { .. }
            | YatraError::JsonError(_)
            | YatraError::IoError { .. } => 502,

            // 503 Service Unavailable - Backend temporarily down
            YatraError::StoreUnavailable { .. } => 503,
        }
    }

    /// Converts this error to a JSON-serializable response object
    ///
    /// Returns a structure suitable for API error responses:
    /// ```json
    /// {
    ///   "error": {
    ///     "code": "TRIP_NOT_FOUND",
    ///     "message": "Trip not found: 'everest-base-camp'...",
    ///     "category": "not_found",
    ///     "recoverable": false
    ///   }
    /// }
    /// ```
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                category: self.category(),
                recoverable: self.is_recoverable(),
            },
        }
    }
}

/// JSON-serializable error response for APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail for JSON responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code (e.g., "TRIP_NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category
    pub category: ErrorCategory,
    /// Whether retry might succeed
    pub recoverable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_recoverable() {
        assert!(YatraError::StoreUnavailable {
            reason: "connection refused".to_string()
        }
        .is_recoverable());
        assert!(YatraError::StoreLocked.is_recoverable());
        assert!(!YatraError::TripNotFound {
            slug: "test".to_string()
        }
        .is_recoverable());
        assert!(!YatraError::InvalidRecord {
            entity: "term".to_string(),
            reason: "name is empty".to_string()
        }
        .is_recoverable());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            YatraError::TripNotFound {
                slug: "test".to_string()
            }
            .error_code(),
            "TRIP_NOT_FOUND"
        );
        assert_eq!(
            YatraError::DuplicateSlug {
                entity: "tag".to_string(),
                slug: "trekking".to_string()
            }
            .error_code(),
            "DUPLICATE_SLUG"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            YatraError::TermNotFound {
                slug: "test".to_string()
            }
            .http_status_code(),
            404
        );
        assert_eq!(
            YatraError::DuplicateSlug {
                entity: "trip".to_string(),
                slug: "ebc".to_string()
            }
            .http_status_code(),
            409
        );
        assert_eq!(
            YatraError::StoreUnavailable {
                reason: "timeout".to_string()
            }
            .http_status_code(),
            503
        );
        assert_eq!(YatraError::StoreLocked.http_status_code(), 500);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            YatraError::PostNotFound {
                slug: "test".to_string()
            }
            .category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            YatraError::StoreUnavailable {
                reason: "down".to_string()
            }
            .category(),
            ErrorCategory::Unavailable
        );
        assert_eq!(
            YatraError::InvalidRecord {
                entity: "term".to_string(),
                reason: "test".to_string()
            }
            .category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn test_is_client_server_error() {
        let client_err = YatraError::TripNotFound {
            slug: "test".to_string(),
        };
        assert!(client_err.is_client_error());
        assert!(!client_err.is_server_error());

        let server_err = YatraError::StoreLocked;
        assert!(!server_err.is_client_error());
        assert!(server_err.is_server_error());
    }

    #[test]
    fn test_error_response_serialization() {
        let err = YatraError::TripNotFound {
            slug: "annapurna-circuit".to_string(),
        };
        let response = err.to_error_response();

        let json = serde_json::to_string_pretty(&response).unwrap();
        assert!(json.contains("TRIP_NOT_FOUND"));
        assert!(json.contains("annapurna-circuit"));
        assert!(json.contains("not_found"));

        // Verify it can be deserialized
        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.error.code, "TRIP_NOT_FOUND");
        assert!(!parsed.error.recoverable);
    }

    #[test]
    fn test_error_messages_are_helpful() {
        let err = YatraError::StoreUnavailable {
            reason: "connection refused".to_string(),
        };
        let msg = err.to_string();
        // Message should include the reason and guidance for the caller
        assert!(msg.contains("connection refused"));
        assert!(msg.contains("auto-link"));
    }
}
