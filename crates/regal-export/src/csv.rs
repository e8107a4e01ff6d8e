//! # CSV Export Module
//!
//! Renders an assembled BOM as CSV for the generic export collaborators.
//!
//! ## Contract
//! - Header row fixed as `SKU,Name,Quantity,Unit,Note`
//! - One row per BOM line, in the assembler's category order
//! - Name/Note are quote-escaped as needed (delegated to the csv writer)

use regal_core::bom::BomLine;

use crate::error::ExportResult;

/// The fixed export header.
pub const CSV_HEADER: [&str; 5] = ["SKU", "Name", "Quantity", "Unit", "Note"];

/// Encodes BOM lines as a CSV document.
///
/// ## Example
/// ```rust
/// use regal_core::bom::assemble;
/// use regal_core::catalog::Catalog;
/// use regal_core::config::{ShelfConfig, ShelfWidth, ShelfHeight, Material, Finish};
/// use regal_export::csv::bom_to_csv;
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
/// let csv = bom_to_csv(&bom).unwrap();
/// assert!(csv.starts_with("SKU,Name,Quantity,Unit,Note\n"));
/// ```
pub fn bom_to_csv(lines: &[BomLine]) -> ExportResult<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(CSV_HEADER)?;
        for line in lines {
            writer.write_record([
                line.sku.as_str(),
                line.name.as_str(),
                &line.qty.to_string(),
                line.unit.as_str(),
                line.note.as_deref().unwrap_or(""),
            ])?;
        }
        writer.flush()?;
    }
    // The csv writer only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// =============================================================================
// Unit Tests
// =============================================================================
