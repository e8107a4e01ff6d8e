//! # Error Types
//!
//! Export and persistence errors for regal-export.

use thiserror::Error;

// =============================================================================
// Export Error
// =============================================================================

/// Errors raised while encoding or persisting a quote.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The payload failed the core's boundary shape check.
    ///
    /// The store refuses to write anything for such payloads; the
    /// individual findings are carried for the caller to surface.
    #[error("payload failed boundary validation: {}", .0.join("; "))]
    InvalidPayload(Vec<String>),

    /// CSV encoding failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_payload_message_joins_findings() {
        let err = ExportError::InvalidPayload(vec![
            "config.width must be 38 or 75".to_string(),
            "bom must be a non-empty array".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "payload failed boundary validation: config.width must be 38 or 75; bom must be a non-empty array"
        );
    }
}
