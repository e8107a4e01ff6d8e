//! # Configuration Module
//!
//! The user's structural choices for a shelf, plus the normalizer that turns
//! raw input into a well-formed configuration.
//!
//! ## Normalization Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Normalization Layers                               │
//! │                                                                         │
//! │  Layer 1: Serde boundary (this module's deserializers)                 │
//! │  ├── Closed enums reject unknown width/height/material/finish codes    │
//! │  └── Safe-number rule: non-numeric / non-finite / negative → 0         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: normalize() ← range clamping                                 │
//! │  ├── sections floor-clamped to [1, 12]                                 │
//! │  └── levels floor-clamped to [1, 8]                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Rule validation (rules module)                               │
//! │  └── Semantic checks: fronts vs compartments, finish/material, ...     │
//! │                                                                         │
//! │  normalize() NEVER rejects: garbage-in is clamped, not errored         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every config mutation in the wider system goes "apply patch, then
//! normalize" - a raw patch is never stored.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::{MAX_LEVELS, MAX_SECTIONS, MIN_LEVELS, MIN_SECTIONS};

// =============================================================================
// Shelf Width
// =============================================================================

/// Shelf width, one of exactly two UI-facing values.
///
/// ## Two Width Systems
/// The UI talks in shelf centimetres (38/75); inventory systems use the
/// ERP width codes (40/80). The mapping is 1:1 and fixed:
///
/// | Variant  | UI (cm) | ERP code |
/// |----------|---------|----------|
/// | `Narrow` | 38      | 40       |
/// | `Wide`   | 75      | 80       |
///
/// On the wire (JSON) the UI value is used, so `"width": 38` deserializes
/// to `Narrow`. Unknown codes are rejected at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ShelfWidth {
    /// 38 cm shelf, ERP code 40.
    Narrow,
    /// 75 cm shelf, ERP code 80.
    Wide,
}

impl ShelfWidth {
    /// All widths, in UI order.
    pub const ALL: [ShelfWidth; 2] = [ShelfWidth::Narrow, ShelfWidth::Wide];

    /// The UI-facing width in centimetres (38 or 75).
    #[inline]
    pub const fn ui_cm(&self) -> u32 {
        match self {
            ShelfWidth::Narrow => 38,
            ShelfWidth::Wide => 75,
        }
    }

    /// The ERP-facing width code (40 or 80).
    #[inline]
    pub const fn erp_code(&self) -> u32 {
        match self {
            ShelfWidth::Narrow => 40,
            ShelfWidth::Wide => 80,
        }
    }
}

/// Unknown width code on the wire.
#[derive(Debug, Error)]
#[error("unknown shelf width: {0} (expected 38 or 75)")]
pub struct UnknownWidth(pub u32);

impl TryFrom<u32> for ShelfWidth {
    type Error = UnknownWidth;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            38 => Ok(ShelfWidth::Narrow),
            75 => Ok(ShelfWidth::Wide),
            other => Err(UnknownWidth(other)),
        }
    }
}

impl From<ShelfWidth> for u32 {
    fn from(value: ShelfWidth) -> Self {
        value.ui_cm()
    }
}

// =============================================================================
// Shelf Height
// =============================================================================

/// Shelf height, a closed ordered ladder of five rungs (in centimetres).
///
/// On the wire the centimetre value is used (`"height": 200`); unknown
/// values are rejected at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ShelfHeight {
    H80,
    H120,
    H160,
    H200,
    H240,
}

impl ShelfHeight {
    /// All heights, shortest first.
    pub const ALL: [ShelfHeight; 5] = [
        ShelfHeight::H80,
        ShelfHeight::H120,
        ShelfHeight::H160,
        ShelfHeight::H200,
        ShelfHeight::H240,
    ];

    /// Height in centimetres.
    #[inline]
    pub const fn cm(&self) -> u32 {
        match self {
            ShelfHeight::H80 => 80,
            ShelfHeight::H120 => 120,
            ShelfHeight::H160 => 160,
            ShelfHeight::H200 => 200,
            ShelfHeight::H240 => 240,
        }
    }
}

/// Unknown height value on the wire.
#[derive(Debug, Error)]
#[error("unknown shelf height: {0} (expected one of 80, 120, 160, 200, 240)")]
pub struct UnknownHeight(pub u32);

impl TryFrom<u32> for ShelfHeight {
    type Error = UnknownHeight;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            80 => Ok(ShelfHeight::H80),
            120 => Ok(ShelfHeight::H120),
            160 => Ok(ShelfHeight::H160),
            200 => Ok(ShelfHeight::H200),
            240 => Ok(ShelfHeight::H240),
            other => Err(UnknownHeight(other)),
        }
    }
}

impl From<ShelfHeight> for u32 {
    fn from(value: ShelfHeight) -> Self {
        value.cm()
    }
}

// =============================================================================
// Material & Finish
// =============================================================================

/// Shelf material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Metal,
    Glass,
}

impl Material {
    /// Both materials.
    pub const ALL: [Material; 2] = [Material::Metal, Material::Glass];

    /// Three-letter code used in SKU derivation.
    #[inline]
    pub const fn sku_code(&self) -> &'static str {
        match self {
            Material::Metal => "MET",
            Material::Glass => "GLS",
        }
    }
}

/// Panel finish: seven colors plus satin.
///
/// Satin is only meaningful on glass; choosing it on metal produces a
/// validation warning but is still honored in the panel SKU (the finish is
/// never auto-corrected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    White,
    Black,
    Gray,
    Red,
    Blue,
    Green,
    Yellow,
    Satin,
}

impl Finish {
    /// All finishes.
    pub const ALL: [Finish; 8] = [
        Finish::White,
        Finish::Black,
        Finish::Gray,
        Finish::Red,
        Finish::Blue,
        Finish::Green,
        Finish::Yellow,
        Finish::Satin,
    ];

    /// Three-letter code used in SKU derivation.
    #[inline]
    pub const fn sku_code(&self) -> &'static str {
        match self {
            Finish::White => "WHT",
            Finish::Black => "BLK",
            Finish::Gray => "GRY",
            Finish::Red => "RED",
            Finish::Blue => "BLU",
            Finish::Green => "GRN",
            Finish::Yellow => "YEL",
            Finish::Satin => "SAT",
        }
    }

    /// Display label for catalog names.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Finish::White => "white",
            Finish::Black => "black",
            Finish::Gray => "gray",
            Finish::Red => "red",
            Finish::Blue => "blue",
            Finish::Green => "green",
            Finish::Yellow => "yellow",
            Finish::Satin => "satin",
        }
    }
}

// =============================================================================
// Panel Overrides & Module Counts
// =============================================================================

/// Optional panel count overrides.
///
/// `shelves = 0` means "auto": the deriver falls back to one shelf per
/// compartment. Side and back walls default to none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PanelOverrides {
    /// Shelf panels; 0 = auto-computed from compartments.
    #[serde(default, deserialize_with = "de_safe_count")]
    pub shelves: u32,

    /// Side wall panels.
    #[serde(default, deserialize_with = "de_safe_count")]
    pub side_walls: u32,

    /// Back wall panels.
    #[serde(default, deserialize_with = "de_safe_count")]
    pub back_walls: u32,
}

/// Per-configuration counts of front modules and function walls.
///
/// Every count defaults to 0. The "40" / "80" suffixes are the ERP width
/// the module fits (doors come in 40 cm, double drawers span 80 cm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCounts {
    /// Plain hinged doors (40 cm).
    #[serde(default, deserialize_with = "de_safe_count")]
    pub doors40: u32,

    /// Lockable hinged doors (40 cm).
    #[serde(default, deserialize_with = "de_safe_count")]
    pub lockable_doors40: u32,

    /// Flap-door frames.
    #[serde(default, deserialize_with = "de_safe_count")]
    pub flap_doors: u32,

    /// Double drawers (80 cm).
    #[serde(default, deserialize_with = "de_safe_count")]
    pub double_drawers80: u32,

    /// Jalousie (roller shutter) fronts (80 cm).
    #[serde(default, deserialize_with = "de_safe_count")]
    pub jalousie80: u32,

    /// Function wall, variant 1.
    #[serde(default, deserialize_with = "de_safe_count")]
    pub function_wall1: u32,

    /// Function wall, variant 2.
    #[serde(default, deserialize_with = "de_safe_count")]
    pub function_wall2: u32,
}

impl ModuleCounts {
    /// Total number of front modules competing for compartment faces.
    ///
    /// Function walls mount inside a compartment and do not occupy its
    /// front, so they are excluded from the cap.
    ///
    /// Saturating: each count is boundary-coerced individually, so their
    /// sum can exceed u32 range. The cap rule flags such totals anyway.
    #[inline]
    pub const fn fronts_total(&self) -> u32 {
        self.doors40
            .saturating_add(self.lockable_doors40)
            .saturating_add(self.flap_doors)
            .saturating_add(self.double_drawers80)
            .saturating_add(self.jalousie80)
    }
}

// =============================================================================
// Shelf Configuration
// =============================================================================

/// A complete structural configuration of a shelf.
///
/// Constructed fresh from user interaction or an incoming request body and
/// treated as immutable per derivation pass: every downstream step takes a
/// config and returns new values, never mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShelfConfig {
    /// Shelf width (UI 38/75, ERP 40/80).
    #[ts(as = "u32")]
    pub width: ShelfWidth,

    /// Shelf height, one of five rungs.
    #[ts(as = "u32")]
    pub height: ShelfHeight,

    /// Number of side-by-side bays. Clamped to [1, 12] by [`normalize`].
    #[serde(default, deserialize_with = "de_safe_count")]
    pub sections: u32,

    /// Number of stacked levels per bay. Clamped to [1, 8] by [`normalize`].
    #[serde(default, deserialize_with = "de_safe_count")]
    pub levels: u32,

    /// Shelf material.
    pub material: Material,

    /// Panel finish.
    pub finish: Finish,

    /// Optional panel overrides; all-zero means fully automatic.
    #[serde(default)]
    pub panels: PanelOverrides,

    /// Front-module counts; all default to 0.
    #[serde(default)]
    pub modules: ModuleCounts,
}

// =============================================================================
// Normalizer
// =============================================================================

/// Clamps a configuration into a well-formed one.
///
/// ## Contract
/// - `sections` clamped to [1, 12], `levels` clamped to [1, 8]
/// - never rejects input: garbage-in is clamped, not errored
/// - deterministic and idempotent: `normalize(normalize(c)) == normalize(c)`
///
/// Semantic correctness (fronts vs compartments, finish/material pairing)
/// is the rule validator's job, not this function's.
///
/// ## Example
/// ```rust
/// use regal_core::config::{normalize, ShelfConfig, ShelfWidth, ShelfHeight, Material, Finish};
///
/// let raw = ShelfConfig {
///     width: ShelfWidth::Narrow,
///     height: ShelfHeight::H200,
///     sections: 15, // out of range
///     levels: 0,    // out of range
///     material: Material::Metal,
///     finish: Finish::White,
///     panels: Default::default(),
///     modules: Default::default(),
/// };
/// let cfg = normalize(&raw);
/// assert_eq!(cfg.sections, 12);
/// assert_eq!(cfg.levels, 1);
/// ```
pub fn normalize(config: &ShelfConfig) -> ShelfConfig {
    let mut normalized = config.clone();
    normalized.sections = config.sections.clamp(MIN_SECTIONS, MAX_SECTIONS);
    normalized.levels = config.levels.clamp(MIN_LEVELS, MAX_LEVELS);
    normalized
}

// =============================================================================
// Safe-Number Deserialization
// =============================================================================

/// Coerces any JSON value into a non-negative integer count.
///
/// The configurator frontend historically sent loosely-typed patches, so
/// the boundary accepts any number and floors it. Non-numeric, non-finite
/// or negative input becomes 0; normalization and rule validation handle
/// the rest.
fn de_safe_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(safe_count(value.as_f64().unwrap_or(0.0)))
}

/// The "safe number" rule: floor, then clamp into u32 range.
fn safe_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= u32::MAX as f64 {
        u32::MAX
    } else {
        floored as u32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ShelfConfig {
        ShelfConfig {
            width: ShelfWidth::Narrow,
            height: ShelfHeight::H80,
            sections: 3,
            levels: 2,
            material: Material::Metal,
            finish: Finish::White,
            panels: PanelOverrides::default(),
            modules: ModuleCounts::default(),
        }
    }

    #[test]
    fn test_width_mapping() {
        assert_eq!(ShelfWidth::Narrow.ui_cm(), 38);
        assert_eq!(ShelfWidth::Narrow.erp_code(), 40);
        assert_eq!(ShelfWidth::Wide.ui_cm(), 75);
        assert_eq!(ShelfWidth::Wide.erp_code(), 80);
    }

    #[test]
    fn test_width_wire_format() {
        let narrow: ShelfWidth = serde_json::from_str("38").unwrap();
        assert_eq!(narrow, ShelfWidth::Narrow);
        assert_eq!(serde_json::to_string(&ShelfWidth::Wide).unwrap(), "75");

        // ERP codes are NOT wire values
        assert!(serde_json::from_str::<ShelfWidth>("40").is_err());
        assert!(serde_json::from_str::<ShelfWidth>("0").is_err());
    }

    #[test]
    fn test_height_wire_format() {
        let h: ShelfHeight = serde_json::from_str("200").unwrap();
        assert_eq!(h, ShelfHeight::H200);
        assert!(serde_json::from_str::<ShelfHeight>("90").is_err());
    }

    #[test]
    fn test_height_ordering() {
        assert!(ShelfHeight::H80 < ShelfHeight::H240);
        let mut all = ShelfHeight::ALL;
        all.sort();
        assert_eq!(all, ShelfHeight::ALL);
    }

    #[test]
    fn test_normalize_clamps_sections() {
        let mut raw = base_config();
        raw.sections = 15;
        assert_eq!(normalize(&raw).sections, 12);

        raw.sections = 0;
        assert_eq!(normalize(&raw).sections, 1);

        raw.sections = 7;
        assert_eq!(normalize(&raw).sections, 7);
    }

    #[test]
    fn test_normalize_clamps_levels() {
        let mut raw = base_config();
        raw.levels = 99;
        assert_eq!(normalize(&raw).levels, 8);

        raw.levels = 0;
        assert_eq!(normalize(&raw).levels, 1);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut raw = base_config();
        raw.sections = 100;
        raw.levels = 0;
        let once = normalize(&raw);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_safe_count_rule() {
        assert_eq!(safe_count(3.0), 3);
        assert_eq!(safe_count(3.9), 3); // floor
        assert_eq!(safe_count(-2.0), 0);
        assert_eq!(safe_count(f64::NAN), 0);
        assert_eq!(safe_count(f64::INFINITY), 0); // non-finite, not "very large"
        assert_eq!(safe_count(1e30), u32::MAX);
        assert_eq!(safe_count(0.4), 0);
    }

    #[test]
    fn test_deserialize_garbage_counts() {
        // Fractional, negative and non-numeric panel counts all coerce
        let json = r#"{
            "width": 38, "height": 80,
            "sections": 3.7, "levels": -1,
            "material": "metal", "finish": "white",
            "panels": { "shelves": "garbage", "sideWalls": 2.9 }
        }"#;
        let cfg: ShelfConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.sections, 3);
        assert_eq!(cfg.levels, 0); // normalize() will clamp to 1
        assert_eq!(cfg.panels.shelves, 0);
        assert_eq!(cfg.panels.side_walls, 2);
        assert_eq!(cfg.panels.back_walls, 0);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{"width": 75, "height": 240, "material": "glass", "finish": "satin"}"#;
        let cfg: ShelfConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.sections, 0);
        assert_eq!(cfg.modules, ModuleCounts::default());

        let cfg = normalize(&cfg);
        assert_eq!(cfg.sections, 1);
        assert_eq!(cfg.levels, 1);
    }

    #[test]
    fn test_fronts_total_excludes_function_walls() {
        let modules = ModuleCounts {
            doors40: 2,
            lockable_doors40: 1,
            flap_doors: 1,
            double_drawers80: 1,
            jalousie80: 1,
            function_wall1: 5,
            function_wall2: 5,
        };
        assert_eq!(modules.fronts_total(), 6);
    }

    #[test]
    fn test_fronts_total_saturates() {
        let modules = ModuleCounts {
            doors40: u32::MAX,
            lockable_doors40: u32::MAX,
            flap_doors: 3,
            ..ModuleCounts::default()
        };
        assert_eq!(modules.fronts_total(), u32::MAX);
    }

    #[test]
    fn test_config_roundtrip() {
        let cfg = base_config();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ShelfConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
