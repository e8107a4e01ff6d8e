//! # regal-core: Pure BOM Engine for the Regal Configurator
//!
//! This crate is the **heart** of the Regal shelving configurator. It turns
//! a structural configuration into a normalized config, derived structural
//! quantities, a rule-based validation report, and a flattened, priced bill
//! of materials - all as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Regal Configurator Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Frontend (React 3D configurator)                │   │
//! │  │   Scene editor ──► Config panel ──► Cart ──► Quote request     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quote-api (axum handlers)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ regal-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  config   │  │  derive   │  │   rules   │  │    bom    │  │   │
//! │  │   │ normalize │  │ quantities│  │  battery  │  │ assemble  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              regal-export (CSV encoder, quote store)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration types and the normalizer
//! - [`derive`] - Derived structural quantities
//! - [`rules`] - Business-rule battery and validation messages
//! - [`bom`] - BOM assembly and line types
//! - [`catalog`] - Immutable SKU/price lookup table
//! - [`payload`] - Quote payload and boundary shape check
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Clamp, Don't Reject**: Garbage numeric input is normalized, never errored
//! 4. **Integer Money**: All prices are euro cents (i64) to avoid float errors
//!
//! ## Example Usage
//!
//! ```rust
//! use regal_core::bom::assemble;
//! use regal_core::catalog::Catalog;
//! use regal_core::config::{normalize, ShelfConfig, ShelfWidth, ShelfHeight, Material, Finish};
//! use regal_core::rules::{is_valid, validate};
//!
//! let raw = ShelfConfig {
//!     width: ShelfWidth::Narrow,
//!     height: ShelfHeight::H80,
//!     sections: 3,
//!     levels: 2,
//!     material: Material::Metal,
//!     finish: Finish::White,
//!     panels: Default::default(),
//!     modules: Default::default(),
//! };
//!
//! let config = normalize(&raw);
//! let messages = validate(&config);
//! assert!(is_valid(&messages));
//!
//! let bom = assemble(&config, Catalog::standard()).unwrap();
//! assert!(bom.iter().all(|line| line.qty > 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bom;
pub mod catalog;
pub mod config;
pub mod derive;
pub mod error;
pub mod money;
pub mod payload;
pub mod rules;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use regal_core::Money` instead of
// `use regal_core::money::Money`

pub use bom::{assemble, bom_total, BomLine, Category, Unit};
pub use catalog::{Catalog, CatalogEntry};
pub use config::{normalize, Finish, Material, ModuleCounts, PanelOverrides, ShelfConfig, ShelfHeight, ShelfWidth};
pub use derive::{derive, DerivedQuantities};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use payload::{validate_minimal, CustomerInfo, QuotePayload};
pub use rules::{is_valid, validate, RuleCode, RuleMessage, Severity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of side-by-side bays.
pub const MIN_SECTIONS: u32 = 1;

/// Maximum number of side-by-side bays.
///
/// ## Business Reason
/// Longer runs need an engineered layout; the configurator caps out at 12
/// bays and the normalizer clamps anything above.
pub const MAX_SECTIONS: u32 = 12;

/// Minimum number of stacked levels per bay.
pub const MIN_LEVELS: u32 = 1;

/// Maximum number of stacked levels per bay.
pub const MAX_LEVELS: u32 = 8;

/// Panels ship in packs of this size; odd totals round up to full packs.
pub const PANELS_PER_PACK: u32 = 2;

/// Adapters consumed by one tube set.
pub const ADAPTERS_PER_TUBE_SET: u32 = 4;

/// One screw set covers this many tube sets (at least one set always ships).
pub const TUBE_SETS_PER_SCREW_SET: u32 = 4;

/// Corner protectors per glass panel.
pub const CORNER_PROTECTORS_PER_PANEL: u32 = 4;
