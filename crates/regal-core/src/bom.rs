//! # BOM Assembly Module
//!
//! Turns a valid configuration into the flattened, priced parts list.
//!
//! ## Assembly Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BOM Assembly                                       │
//! │                                                                         │
//! │  assemble(config, catalog)                                              │
//! │       │                                                                 │
//! │       ├── validate(config)                                              │
//! │       │      └── any Error? → Ok(vec![])  (logged, silent no-op)       │
//! │       │                                                                 │
//! │       ├── derive(normalize(config))                                     │
//! │       │                                                                 │
//! │       └── emit lines in fixed category order:                          │
//! │              upright → tubeset → panel → accessory → module            │
//! │                                                                         │
//! │  INVARIANT: lines with qty = 0 are never emitted.                      │
//! │  INVARIANT: same valid configuration → same ordered BOM.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that need to distinguish "invalid" from "valid-but-empty" must
//! call [`crate::rules::validate`] themselves first.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::{
    sku_panel, sku_tube_set, sku_upright, Catalog, SKU_ADAPTER, SKU_CORNER_PROTECTOR,
    SKU_EXTRA_SCREWS, SKU_MOD_DOOR40, SKU_MOD_DRAWER80, SKU_MOD_FLAP, SKU_MOD_FUNCTION_WALL1,
    SKU_MOD_FUNCTION_WALL2, SKU_MOD_JALOUSIE80, SKU_MOD_LOCKABLE40, SKU_SCREW_SET,
    SKU_STABILIZER_ROD,
};
use crate::config::{normalize, ShelfConfig};
use crate::derive::derive;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::{is_valid, validate};

// =============================================================================
// Line Types
// =============================================================================

/// Shipping unit of a BOM line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Pcs,
    Set,
    Pack,
}

impl Unit {
    /// Lowercase label used in CSV exports.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::Set => "set",
            Unit::Pack => "pack",
        }
    }
}

/// Category of a BOM line; also the fixed emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Upright,
    Tubeset,
    Panel,
    Accessory,
    Module,
}

/// One parts-list entry.
///
/// Uses the snapshot pattern: name and unit price are frozen from the
/// catalog at assembly time, so a later catalog change never rewrites an
/// already-produced BOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    /// Deterministic SKU (category + size + material/finish).
    pub sku: String,
    /// Catalog name at assembly time (frozen).
    pub name: String,
    /// Quantity; always > 0 in an assembled BOM.
    pub qty: u32,
    /// Shipping unit.
    pub unit: Unit,
    /// Line category.
    pub category: Category,
    /// Unit price at assembly time (frozen).
    pub unit_price: Money,
    /// unit_price × qty.
    pub line_total: Money,
    /// Optional shipping note.
    pub note: Option<String>,
}

// =============================================================================
// Assembler
// =============================================================================

/// Assembles the priced parts list for a configuration.
///
/// Returns `Ok(vec![])` for invalid configurations (the rejection is
/// logged at debug level). The only error condition is a catalog lookup
/// miss, which cannot happen with [`Catalog::standard`].
///
/// ## Example
/// ```rust
/// use regal_core::bom::assemble;
/// use regal_core::catalog::Catalog;
/// use regal_core::config::{ShelfConfig, ShelfWidth, ShelfHeight, Material, Finish};
///
/// let cfg = ShelfConfig {
///     width: ShelfWidth::Narrow,
///     height: ShelfHeight::H80,
///     sections: 3,
///     levels: 2,
///     material: Material::Metal,
///     finish: Finish::White,
///     panels: Default::default(),
///     modules: Default::default(),
/// };
/// let bom = assemble(&cfg, Catalog::standard()).unwrap();
/// assert_eq!(bom.len(), 5); // upright, tubeset, panel, adapters, screws
/// ```
pub fn assemble(config: &ShelfConfig, catalog: &Catalog) -> CoreResult<Vec<BomLine>> {
    let messages = validate(config);
    if !is_valid(&messages) {
        let errors: Vec<&str> = messages.iter().map(|m| m.message.as_str()).collect();
        debug!(?errors, "rejecting invalid configuration, no BOM assembled");
        return Ok(Vec::new());
    }

    let cfg = normalize(config);
    let d = derive(&cfg);
    let mut lines = Vec::new();

    // Structural lines, fixed category order
    push_line(
        &mut lines,
        catalog,
        sku_upright(cfg.height),
        d.uprights_qty,
        Unit::Pcs,
        Category::Upright,
        None,
    )?;
    push_line(
        &mut lines,
        catalog,
        sku_tube_set(cfg.width, cfg.material),
        d.tube_set_qty,
        Unit::Set,
        Category::Tubeset,
        None,
    )?;
    push_line(
        &mut lines,
        catalog,
        sku_panel(cfg.material, cfg.width, cfg.finish),
        d.panel_packs,
        Unit::Pack,
        Category::Panel,
        Some("2 pieces per pack".to_string()),
    )?;

    // Accessories; conditional quantities are 0 when not applicable and
    // push_line drops zero-qty lines
    push_line(
        &mut lines,
        catalog,
        SKU_ADAPTER.to_string(),
        d.adapters_qty,
        Unit::Pcs,
        Category::Accessory,
        None,
    )?;
    push_line(
        &mut lines,
        catalog,
        SKU_SCREW_SET.to_string(),
        d.screw_set_qty,
        Unit::Set,
        Category::Accessory,
        None,
    )?;
    push_line(
        &mut lines,
        catalog,
        SKU_EXTRA_SCREWS.to_string(),
        d.extra_metal_screws_qty,
        Unit::Set,
        Category::Accessory,
        None,
    )?;
    push_line(
        &mut lines,
        catalog,
        SKU_CORNER_PROTECTOR.to_string(),
        d.corner_protectors_qty,
        Unit::Pcs,
        Category::Accessory,
        None,
    )?;
    push_line(
        &mut lines,
        catalog,
        SKU_STABILIZER_ROD.to_string(),
        d.stabilizer_rod_qty,
        Unit::Pcs,
        Category::Accessory,
        None,
    )?;

    // Front modules & function walls, one line per non-zero count
    let module_lines = [
        (SKU_MOD_DOOR40, cfg.modules.doors40),
        (SKU_MOD_LOCKABLE40, cfg.modules.lockable_doors40),
        (SKU_MOD_FLAP, cfg.modules.flap_doors),
        (SKU_MOD_DRAWER80, cfg.modules.double_drawers80),
        (SKU_MOD_JALOUSIE80, cfg.modules.jalousie80),
        (SKU_MOD_FUNCTION_WALL1, cfg.modules.function_wall1),
        (SKU_MOD_FUNCTION_WALL2, cfg.modules.function_wall2),
    ];
    for (sku, qty) in module_lines {
        push_line(
            &mut lines,
            catalog,
            sku.to_string(),
            qty,
            Unit::Pcs,
            Category::Module,
            None,
        )?;
    }

    Ok(lines)
}

/// Sums the line totals of an assembled BOM.
pub fn bom_total(lines: &[BomLine]) -> Money {
    lines.iter().map(|line| line.line_total).sum()
}

/// Appends one line unless its quantity is zero.
///
/// Freezes catalog name and unit price into the line; a missing catalog
/// entry is the assembler's only error condition.
fn push_line(
    lines: &mut Vec<BomLine>,
    catalog: &Catalog,
    sku: String,
    qty: u32,
    unit: Unit,
    category: Category,
    note: Option<String>,
) -> CoreResult<()> {
    if qty == 0 {
        return Ok(());
    }
    let entry = catalog
        .entry(&sku)
        .ok_or_else(|| CoreError::UnknownSku { sku: sku.clone() })?;
    lines.push(BomLine {
        name: entry.name.clone(),
        qty,
        unit,
        category,
        unit_price: entry.unit_price,
        line_total: entry.unit_price.multiply_quantity(qty as i64),
        note,
        sku,
    });
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
