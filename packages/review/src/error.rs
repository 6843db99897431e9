//! Error types for contract review processing.
//!
//! Follows the dual-error pattern: `ReviewError` for library consumers with
//! detailed context. The segmenter itself never fails; errors only come from
//! reading documents, strict shape checks, output, and the credit ledger.

use thiserror::Error;

/// Main error type for the contract review library.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document JSON could not be parsed or serialized.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// A document field is present but has the wrong shape.
    #[error("Invalid document shape: '{field}' must be {expected}, found {found}")]
    InvalidShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Origin or page URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Credit operation attempted without a user.
    #[error("No user ID provided")]
    MissingUserId,

    /// Store has no credit row for the user.
    #[error("No credit record found for user {0}")]
    NoCreditRecord(String),

    /// User has no credits left.
    #[error("No credits remaining for user {0}")]
    NoCreditsRemaining(String),

    /// Backing credit store failed.
    #[error("Credit store error: {0}")]
    CreditStore(String),
}

/// Result type alias for contract review operations.
pub type Result<T> = std::result::Result<T, ReviewError>;
