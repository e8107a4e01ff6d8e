//! # Structural Derivation Module
//!
//! Computes derived structural quantities from a normalized configuration.
//!
//! ## Derivation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Derivation Pipeline                                  │
//! │                                                                         │
//! │  config ──► normalize (defensive)                                      │
//! │     │                                                                   │
//! │     ├── compartments  = sections × levels                              │
//! │     ├── shelves_auto  = panels.shelves if > 0, else compartments       │
//! │     ├── total_panels  = shelves_auto + side_walls + back_walls         │
//! │     ├── panel_packs   = ceil(total_panels / 2)    (ship in pairs)      │
//! │     ├── uprights      = sections + 1                                   │
//! │     ├── tube_sets     = sections × levels                              │
//! │     ├── adapters      = tube_sets × 4                                  │
//! │     ├── screw_sets    = max(1, ceil(tube_sets / 4))                    │
//! │     ├── extra screws  = total_panels   (wide metal only)               │
//! │     ├── corner prot.  = total_panels × 4         (glass only)          │
//! │     └── stabilizers   = tube_sets           (wide glass only)          │
//! │                                                                         │
//! │  Later formulas depend on earlier ones - the order is fixed.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every quantity is a pure function of the normalized configuration: no
//! error conditions, no state, recomputed on every config change.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::{normalize, Material, ShelfConfig, ShelfWidth};
use crate::{ADAPTERS_PER_TUBE_SET, CORNER_PROTECTORS_PER_PANEL, PANELS_PER_PACK, TUBE_SETS_PER_SCREW_SET};

// =============================================================================
// Derived Quantities
// =============================================================================

/// Computed structural quantities. Never user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DerivedQuantities {
    /// ERP width code (40/80), mapped from the UI width.
    pub width_erp: u32,

    /// sections × levels. Always ≥ 1 for a normalized config.
    pub compartments: u32,

    /// Effective shelf panel count: override if positive, else one per
    /// compartment.
    pub shelves_auto: u32,

    /// shelves_auto + side walls + back walls.
    pub total_panels: u32,

    /// Panels ship in packs of 2; odd totals round up.
    pub panel_packs: u32,

    /// One more vertical post than bays.
    pub uprights_qty: u32,

    /// Horizontal connector sets, one per bay-level.
    pub tube_set_qty: u32,

    /// Four adapters per tube set.
    pub adapters_qty: u32,

    /// One screw set covers four tube sets; at least one is always shipped.
    pub screw_set_qty: u32,

    /// Extra fixing screws, one per panel, for wide metal shelves only.
    pub extra_metal_screws_qty: u32,

    /// Four corner protectors per panel for glass shelves.
    pub corner_protectors_qty: u32,

    /// One stabilizer rod per tube set for wide glass shelves.
    pub stabilizer_rod_qty: u32,
}

// =============================================================================
// Deriver
// =============================================================================

/// Computes all derived quantities for a configuration.
///
/// Normalizes its input first (defensive), then applies the formulas in
/// the fixed order shown in the module docs. Pure, deterministic, total.
///
/// ## Example
/// ```rust
/// use regal_core::config::{ShelfConfig, ShelfWidth, ShelfHeight, Material, Finish};
/// use regal_core::derive::derive;
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
/// let derived = derive(&cfg);
/// assert_eq!(derived.compartments, 6);
/// assert_eq!(derived.uprights_qty, 4);
/// assert_eq!(derived.panel_packs, 3);
/// ```
pub fn derive(config: &ShelfConfig) -> DerivedQuantities {
    let cfg = normalize(config);

    let compartments = cfg.sections * cfg.levels;
    let shelves_auto = if cfg.panels.shelves > 0 {
        cfg.panels.shelves
    } else {
        compartments
    };
    // Panel counts are only boundary-coerced, never clamped, so the sum
    // and the per-panel multiples saturate instead of wrapping.
    let total_panels = shelves_auto
        .saturating_add(cfg.panels.side_walls)
        .saturating_add(cfg.panels.back_walls);
    let panel_packs = total_panels.div_ceil(PANELS_PER_PACK);

    let uprights_qty = cfg.sections + 1;
    let tube_set_qty = cfg.sections * cfg.levels;
    let adapters_qty = tube_set_qty * ADAPTERS_PER_TUBE_SET;
    let screw_set_qty = tube_set_qty.div_ceil(TUBE_SETS_PER_SCREW_SET).max(1);

    let wide = cfg.width == ShelfWidth::Wide;
    let glass = cfg.material == Material::Glass;

    let extra_metal_screws_qty = if cfg.material == Material::Metal && wide {
        total_panels
    } else {
        0
    };
    let corner_protectors_qty = if glass {
        total_panels.saturating_mul(CORNER_PROTECTORS_PER_PANEL)
    } else {
        0
    };
    let stabilizer_rod_qty = if glass && wide { tube_set_qty } else { 0 };

    DerivedQuantities {
        width_erp: cfg.width.erp_code(),
        compartments,
        shelves_auto,
        total_panels,
        panel_packs,
        uprights_qty,
        tube_set_qty,
        adapters_qty,
        screw_set_qty,
        extra_metal_screws_qty,
        corner_protectors_qty,
        stabilizer_rod_qty,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Finish, ModuleCounts, PanelOverrides, ShelfHeight};

    fn config(width: ShelfWidth, material: Material, sections: u32, levels: u32) -> ShelfConfig {
        ShelfConfig {
            width,
            height: ShelfHeight::H80,
            sections,
            levels,
            material,
            finish: Finish::White,
            panels: PanelOverrides::default(),
            modules: ModuleCounts::default(),
        }
    }

    #[test]
    fn test_narrow_metal_baseline() {
        // 3 bays × 2 levels, narrow metal, white, no overrides
        let d = derive(&config(ShelfWidth::Narrow, Material::Metal, 3, 2));
        assert_eq!(d.width_erp, 40);
        assert_eq!(d.compartments, 6);
        assert_eq!(d.shelves_auto, 6);
        assert_eq!(d.total_panels, 6);
        assert_eq!(d.panel_packs, 3);
        assert_eq!(d.uprights_qty, 4);
        assert_eq!(d.tube_set_qty, 6);
        assert_eq!(d.adapters_qty, 24);
        assert_eq!(d.screw_set_qty, 2);
        assert_eq!(d.extra_metal_screws_qty, 0); // narrow
        assert_eq!(d.corner_protectors_qty, 0);
        assert_eq!(d.stabilizer_rod_qty, 0);
    }

    #[test]
    fn test_wide_metal_adds_extra_screws() {
        let d = derive(&config(ShelfWidth::Wide, Material::Metal, 3, 2));
        assert_eq!(d.width_erp, 80);
        assert_eq!(d.extra_metal_screws_qty, 6);
        assert_eq!(d.stabilizer_rod_qty, 0);
    }

    #[test]
    fn test_wide_glass_accessories() {
        let d = derive(&config(ShelfWidth::Wide, Material::Glass, 3, 2));
        assert_eq!(d.corner_protectors_qty, 24); // 6 panels × 4
        assert_eq!(d.stabilizer_rod_qty, 6); // one per tube set
        assert_eq!(d.extra_metal_screws_qty, 0);
    }

    #[test]
    fn test_narrow_glass_has_no_stabilizers() {
        let d = derive(&config(ShelfWidth::Narrow, Material::Glass, 2, 2));
        assert_eq!(d.corner_protectors_qty, 16);
        assert_eq!(d.stabilizer_rod_qty, 0);
    }

    #[test]
    fn test_shelf_override_replaces_auto_count() {
        let mut cfg = config(ShelfWidth::Narrow, Material::Metal, 3, 2);
        cfg.panels = PanelOverrides {
            shelves: 4,
            side_walls: 2,
            back_walls: 1,
        };
        let d = derive(&cfg);
        assert_eq!(d.shelves_auto, 4);
        assert_eq!(d.total_panels, 7);
        assert_eq!(d.panel_packs, 4); // odd total rounds up
    }

    #[test]
    fn test_panel_pairing_property() {
        for total in 0..30u32 {
            let mut cfg = config(ShelfWidth::Narrow, Material::Metal, 1, 1);
            cfg.panels.shelves = total;
            let d = derive(&cfg);
            assert_eq!(d.panel_packs, d.total_panels.div_ceil(2));
        }
    }

    #[test]
    fn test_screw_set_minimum_of_one() {
        let d = derive(&config(ShelfWidth::Narrow, Material::Metal, 1, 1));
        assert_eq!(d.tube_set_qty, 1);
        assert_eq!(d.screw_set_qty, 1);

        // 12 × 8 = 96 tube sets → 24 screw sets
        let d = derive(&config(ShelfWidth::Narrow, Material::Metal, 12, 8));
        assert_eq!(d.screw_set_qty, 24);
    }

    #[test]
    fn test_derive_normalizes_defensively() {
        // Out-of-range input never reaches the formulas un-clamped
        let d = derive(&config(ShelfWidth::Narrow, Material::Metal, 15, 0));
        assert_eq!(d.compartments, 12); // 12 × 1
        assert_eq!(d.uprights_qty, 13);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let cfg = config(ShelfWidth::Wide, Material::Glass, 5, 3);
        assert_eq!(derive(&cfg), derive(&cfg));
    }

    #[test]
    fn test_huge_panel_counts_saturate() {
        // Boundary coercion caps each count at u32::MAX individually;
        // their sum must clamp instead of wrapping
        let mut cfg = config(ShelfWidth::Narrow, Material::Glass, 1, 1);
        cfg.panels = PanelOverrides {
            shelves: u32::MAX,
            side_walls: u32::MAX,
            back_walls: 7,
        };
        let d = derive(&cfg);
        assert_eq!(d.total_panels, u32::MAX);
        assert_eq!(d.corner_protectors_qty, u32::MAX);
        assert_eq!(d.panel_packs, u32::MAX.div_ceil(2));
    }

    #[test]
    fn test_compartments_always_at_least_one() {
        let d = derive(&config(ShelfWidth::Narrow, Material::Metal, 0, 0));
        assert!(d.compartments >= 1);
    }
}
