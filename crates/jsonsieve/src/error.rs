//! Error types for the jsonsieve crate.

use thiserror::Error;

/// Errors that can occur when compiling search terms or loading records.
///
/// Matching itself never fails: missing properties and unexpected value
/// types simply do not match.
#[derive(Debug, Error)]
pub enum SieveError {
    /// The search term is not a valid regular expression.
    ///
    /// Only reachable with [`TermSyntax::Pattern`](crate::TermSyntax::Pattern).
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A JSON document expected to hold a record collection was not an array.
    #[error("expected a JSON array of records, got {found}")]
    NotAnArray { found: &'static str },

    /// The JSON document could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for jsonsieve operations.
pub type Result<T> = std::result::Result<T, SieveError>;
