//! # regal-export: BOM Export & Quote Persistence
//!
//! Downstream consumers of the core's output bundle:
//!
//! - [`csv`] - the generic CSV encoder (`SKU,Name,Quantity,Unit,Note`)
//! - [`store`] - file-backed quote persistence under opaque request ids
//! - [`error`] - export error types
//!
//! ERP-specific wire formats (SAP, Lexware, JTL, DATEV, ...) are owned by
//! the systems consuming these files and are deliberately not modelled
//! here; the core guarantees only non-zero-quantity, category-tagged BOM
//! lines.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod csv;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use csv::{bom_to_csv, CSV_HEADER};
pub use error::{ExportError, ExportResult};
pub use store::{QuoteReceipt, QuoteStore};
