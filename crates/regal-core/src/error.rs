//! # Error Types
//!
//! Domain-specific error types for regal-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The core never errors for well-typed input:                           │
//! │                                                                         │
//! │    normalize  → total (clamps, never rejects)                          │
//! │    derive     → total                                                  │
//! │    validate   → total (findings are RuleMessages, not errors)          │
//! │    assemble   → fallible ONLY on a catalog lookup miss, which          │
//! │                 requires an injected fixture catalog with holes        │
//! │                                                                         │
//! │  Malformed JSON shapes fail at the transport's serde boundary,         │
//! │  which is deliberately outside this crate.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The assembler derived a SKU the injected catalog does not carry.
    ///
    /// ## When This Occurs
    /// Only with an incomplete fixture catalog; [`crate::catalog::Catalog::standard`]
    /// covers every derivable SKU.
    #[error("No catalog entry for SKU {sku}")]
    UnknownSku { sku: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
