//! # Quote Store Module
//!
//! Persists a submitted quote request under an opaque request id.
//!
//! ## Layout
//! ```text
//! <root>/
//!   └── <request-id>/          UUID v4
//!         ├── request.json     raw quote payload, pretty-printed
//!         └── bom.csv          BOM in the fixed export format
//! ```
//!
//! The store is a boundary: it runs the core's minimal payload check and
//! refuses to write anything for payloads that fail it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use regal_core::payload::{validate_minimal, QuotePayload};

use crate::csv::bom_to_csv;
use crate::error::{ExportError, ExportResult};

// =============================================================================
// Quote Store
// =============================================================================

/// File-backed quote persistence.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    root: PathBuf,
}

/// Receipt returned after a successful save.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReceipt {
    /// Opaque request id the quote was filed under.
    pub request_id: Uuid,
    /// When the quote was persisted.
    pub created_at: DateTime<Utc>,
}

impl QuoteStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        QuoteStore { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persists a quote request.
    ///
    /// Runs [`validate_minimal`] first; a failing payload is refused
    /// without touching the filesystem.
    pub fn save(&self, payload: &QuotePayload) -> ExportResult<QuoteReceipt> {
        let raw = serde_json::to_value(payload)?;
        let problems = validate_minimal(&raw);
        if !problems.is_empty() {
            return Err(ExportError::InvalidPayload(problems));
        }

        let request_id = Uuid::new_v4();
        let dir = self.root.join(request_id.to_string());
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("request.json"), serde_json::to_string_pretty(&raw)?)?;
        fs::write(dir.join("bom.csv"), bom_to_csv(&payload.bom)?)?;

        info!(
            %request_id,
            customer = %payload.customer.email,
            lines = payload.bom.len(),
            total = %payload.total,
            "quote persisted"
        );

        Ok(QuoteReceipt {
            request_id,
            created_at: Utc::now(),
        })
    }

    /// Path a given request id is filed under.
    pub fn quote_dir(&self, request_id: Uuid) -> PathBuf {
        self.root.join(request_id.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
