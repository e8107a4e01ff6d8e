//! # Product Catalog Module
//!
//! The immutable lookup table mapping SKUs to names and unit prices.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog as a Collaborator                          │
//! │                                                                         │
//! │  BomAssembler derives a SKU from {category, size, material/finish},    │
//! │  then asks the injected Catalog for name + unit price:                 │
//! │                                                                         │
//! │     assemble(config, &catalog)                                         │
//! │          │                                                              │
//! │          └── catalog.entry("RGL-PAN-MET-40-WHT")                        │
//! │                 → CatalogEntry { name, unit_price }                     │
//! │                                                                         │
//! │  The catalog is injected rather than hard-imported, so the assembler   │
//! │  is testable against fixture catalogs. Catalog::standard() is the      │
//! │  complete built-in table covering every derivable SKU.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{Finish, Material, ShelfHeight, ShelfWidth};
use crate::money::Money;

// =============================================================================
// Accessory & Module SKUs
// =============================================================================

/// Tube-set adapter, four per tube set.
pub const SKU_ADAPTER: &str = "RGL-ADP-STD";
/// Screw set, one per four tube sets.
pub const SKU_SCREW_SET: &str = "RGL-SCR-SET";
/// Extra fixing screws for wide metal shelves, one per panel.
pub const SKU_EXTRA_SCREWS: &str = "RGL-SCR-80";
/// Corner protector for glass panels.
pub const SKU_CORNER_PROTECTOR: &str = "RGL-COR-GLS";
/// Stabilizer rod for wide glass shelves.
pub const SKU_STABILIZER_ROD: &str = "RGL-STB-80";

/// Plain hinged door, 40 cm.
pub const SKU_MOD_DOOR40: &str = "RGL-MOD-DOOR40";
/// Lockable hinged door, 40 cm.
pub const SKU_MOD_LOCKABLE40: &str = "RGL-MOD-LOCK40";
/// Flap-door frame.
pub const SKU_MOD_FLAP: &str = "RGL-MOD-FLAP";
/// Double drawer, 80 cm.
pub const SKU_MOD_DRAWER80: &str = "RGL-MOD-DRW80";
/// Jalousie front, 80 cm.
pub const SKU_MOD_JALOUSIE80: &str = "RGL-MOD-JAL80";
/// Function wall, variant 1.
pub const SKU_MOD_FUNCTION_WALL1: &str = "RGL-MOD-FWALL1";
/// Function wall, variant 2.
pub const SKU_MOD_FUNCTION_WALL2: &str = "RGL-MOD-FWALL2";

// =============================================================================
// SKU Derivation
// =============================================================================
// SKUs are deterministic functions of category + size + material/finish:
// the same configuration always yields the same SKU set.

/// Upright SKU, keyed by height.
pub fn sku_upright(height: ShelfHeight) -> String {
    format!("RGL-UPR-{}", height.cm())
}

/// Tube-set SKU, keyed by ERP width + material variant.
pub fn sku_tube_set(width: ShelfWidth, material: Material) -> String {
    format!("RGL-TUB-{}-{}", width.erp_code(), material.sku_code())
}

/// Panel-pack SKU, keyed by material + ERP width + finish.
pub fn sku_panel(material: Material, width: ShelfWidth, finish: Finish) -> String {
    format!(
        "RGL-PAN-{}-{}-{}",
        material.sku_code(),
        width.erp_code(),
        finish.sku_code()
    )
}

// =============================================================================
// Catalog
// =============================================================================

/// Name and unit price for one SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display name for parts lists and exports.
    pub name: String,
    /// Unit price in euro cents.
    pub unit_price: Money,
}

/// Immutable SKU → entry lookup table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Creates an empty catalog (useful as a test fixture).
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, sku: impl Into<String>, name: impl Into<String>, price_cents: i64) {
        self.entries.insert(
            sku.into(),
            CatalogEntry {
                name: name.into(),
                unit_price: Money::from_cents(price_cents),
            },
        );
    }

    /// Looks up an entry by SKU.
    pub fn entry(&self, sku: &str) -> Option<&CatalogEntry> {
        self.entries.get(sku)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The complete built-in catalog.
    ///
    /// Covers every SKU the assembler can derive: all five upright
    /// heights, all width/material tube-set variants, every
    /// material × width × finish panel pack (satin metal included - the
    /// finish is honored even when the validator warns about it), all
    /// accessories and all module types. Assembly against this catalog is
    /// therefore total for valid configurations.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(build_standard);

fn build_standard() -> Catalog {
    let mut catalog = Catalog::new();

    // Uprights, priced by height
    for height in ShelfHeight::ALL {
        let price = match height {
            ShelfHeight::H80 => 1990,
            ShelfHeight::H120 => 2490,
            ShelfHeight::H160 => 2990,
            ShelfHeight::H200 => 3490,
            ShelfHeight::H240 => 3990,
        };
        catalog.insert(
            sku_upright(height),
            format!("Upright {} cm", height.cm()),
            price,
        );
    }

    // Tube sets, priced by width with a glass surcharge
    for width in ShelfWidth::ALL {
        for material in Material::ALL {
            let base = match width {
                ShelfWidth::Narrow => 890,
                ShelfWidth::Wide => 1290,
            };
            let surcharge = match material {
                Material::Metal => 0,
                Material::Glass => 200,
            };
            let material_label = match material {
                Material::Metal => "metal",
                Material::Glass => "glass",
            };
            catalog.insert(
                sku_tube_set(width, material),
                format!("Tube set {} {}", width.erp_code(), material_label),
                base + surcharge,
            );
        }
    }

    // Panel packs: every material × width × finish combination
    for material in Material::ALL {
        for width in ShelfWidth::ALL {
            for finish in Finish::ALL {
                let price = match (material, width) {
                    (Material::Metal, ShelfWidth::Narrow) => 2490,
                    (Material::Metal, ShelfWidth::Wide) => 3490,
                    (Material::Glass, ShelfWidth::Narrow) => 3990,
                    (Material::Glass, ShelfWidth::Wide) => 4990,
                };
                let material_label = match material {
                    Material::Metal => "metal",
                    Material::Glass => "glass",
                };
                catalog.insert(
                    sku_panel(material, width, finish),
                    format!(
                        "Panel pack {} {}, {}",
                        width.erp_code(),
                        material_label,
                        finish.label()
                    ),
                    price,
                );
            }
        }
    }

    // Accessories
    catalog.insert(SKU_ADAPTER, "Tube adapter", 49);
    catalog.insert(SKU_SCREW_SET, "Screw set", 390);
    catalog.insert(SKU_EXTRA_SCREWS, "Extra fixing screws 80", 290);
    catalog.insert(SKU_CORNER_PROTECTOR, "Corner protector glass", 25);
    catalog.insert(SKU_STABILIZER_ROD, "Stabilizer rod 80", 690);

    // Front modules & function walls
    catalog.insert(SKU_MOD_DOOR40, "Door 40", 3990);
    catalog.insert(SKU_MOD_LOCKABLE40, "Lockable door 40", 5490);
    catalog.insert(SKU_MOD_FLAP, "Flap-door frame", 4490);
    catalog.insert(SKU_MOD_DRAWER80, "Double drawer 80", 8990);
    catalog.insert(SKU_MOD_JALOUSIE80, "Jalousie front 80", 7490);
    catalog.insert(SKU_MOD_FUNCTION_WALL1, "Function wall type 1", 2990);
    catalog.insert(SKU_MOD_FUNCTION_WALL2, "Function wall type 2", 3490);

    catalog
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_derivation_is_deterministic() {
        assert_eq!(sku_upright(ShelfHeight::H80), "RGL-UPR-80");
        assert_eq!(
            sku_tube_set(ShelfWidth::Wide, Material::Glass),
            "RGL-TUB-80-GLS"
        );
        assert_eq!(
            sku_panel(Material::Metal, ShelfWidth::Narrow, Finish::White),
            "RGL-PAN-MET-40-WHT"
        );
    }

    #[test]
    fn test_standard_covers_all_uprights_and_tube_sets() {
        let catalog = Catalog::standard();
        for height in ShelfHeight::ALL {
            assert!(catalog.entry(&sku_upright(height)).is_some());
        }
        for width in ShelfWidth::ALL {
            for material in Material::ALL {
                assert!(catalog.entry(&sku_tube_set(width, material)).is_some());
            }
        }
    }

    #[test]
    fn test_standard_covers_every_panel_combination() {
        let catalog = Catalog::standard();
        for material in Material::ALL {
            for width in ShelfWidth::ALL {
                for finish in Finish::ALL {
                    let sku = sku_panel(material, width, finish);
                    assert!(catalog.entry(&sku).is_some(), "missing {sku}");
                }
            }
        }
    }

    #[test]
    fn test_standard_covers_accessories_and_modules() {
        let catalog = Catalog::standard();
        for sku in [
            SKU_ADAPTER,
            SKU_SCREW_SET,
            SKU_EXTRA_SCREWS,
            SKU_CORNER_PROTECTOR,
            SKU_STABILIZER_ROD,
            SKU_MOD_DOOR40,
            SKU_MOD_LOCKABLE40,
            SKU_MOD_FLAP,
            SKU_MOD_DRAWER80,
            SKU_MOD_JALOUSIE80,
            SKU_MOD_FUNCTION_WALL1,
            SKU_MOD_FUNCTION_WALL2,
        ] {
            assert!(catalog.entry(sku).is_some(), "missing {sku}");
        }
    }

    #[test]
    fn test_fixture_catalog() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.insert("TEST-1", "Test part", 100);
        assert_eq!(catalog.len(), 1);
        let entry = catalog.entry("TEST-1").unwrap();
        assert_eq!(entry.name, "Test part");
        assert_eq!(entry.unit_price, Money::from_cents(100));
    }
}
