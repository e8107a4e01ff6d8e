//! # Rule Validation Module
//!
//! The canonical business-rule battery for shelf configurations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rule Battery                                       │
//! │                                                                         │
//! │  validate(config)                                                       │
//! │       │                                                                 │
//! │       ├── derive(config)          (quantities feed several rules)      │
//! │       │                                                                 │
//! │       └── for rule in RULES:      (fixed order, independent rules)     │
//! │               rule(config, derived) → Option<RuleMessage>              │
//! │                                                                         │
//! │  Severity:  Error   → blocks BOM assembly                              │
//! │             Warning → advisory, never blocks                           │
//! │             Info    → explains automatic quantity adjustments          │
//! │                                                                         │
//! │  A configuration is VALID iff no message has severity Error.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are a flat table of independent predicate functions: order affects
//! only message ordering, never correctness, and new rules are added by
//! appending to [`RULES`] without touching control flow.
//!
//! Width and height enum membership is enforced by the closed Rust enums at
//! the serde boundary, so no rules exist for them here; the loose-JSON
//! check lives in [`crate::payload::validate_minimal`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::{Finish, Material, ShelfConfig};
use crate::derive::{derive, DerivedQuantities};
use crate::{MIN_LEVELS, MIN_SECTIONS, PANELS_PER_PACK};

// =============================================================================
// Message Types
// =============================================================================

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks BOM assembly.
    Error,
    /// Advisory only, never blocks.
    Warning,
    /// Explains an automatic adjustment.
    Info,
}

/// Stable identifier of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RuleCode {
    SectionsMin,
    LevelsMin,
    PanelPairing,
    SatinOnMetal,
    TooManyFronts,
    DoorsNotPaired,
    DoubleDrawerOverflow,
    GlassAccessories,
    GlassStabilizer,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleMessage {
    /// Stable rule identifier for programmatic handling.
    pub code: RuleCode,
    /// How severe the finding is.
    pub severity: Severity,
    /// Human-readable explanation for the configurator UI.
    pub message: String,
}

impl RuleMessage {
    fn error(code: RuleCode, message: String) -> Self {
        RuleMessage {
            code,
            severity: Severity::Error,
            message,
        }
    }

    fn warning(code: RuleCode, message: String) -> Self {
        RuleMessage {
            code,
            severity: Severity::Warning,
            message,
        }
    }

    fn info(code: RuleCode, message: String) -> Self {
        RuleMessage {
            code,
            severity: Severity::Info,
            message,
        }
    }
}

// =============================================================================
// Rule Table
// =============================================================================

/// One rule: a predicate over {config, derived} producing zero or one message.
type Rule = fn(&ShelfConfig, &DerivedQuantities) -> Option<RuleMessage>;

/// The ordered rule battery. Order affects message ordering only.
const RULES: &[Rule] = &[
    rule_sections_min,
    rule_levels_min,
    rule_panel_pairing,
    rule_satin_on_metal,
    rule_fronts_vs_compartments,
    rule_doors_in_pairs,
    rule_double_drawer_overflow,
    rule_glass_accessories,
    rule_glass_stabilizer,
];

// Guards against pre-clamp raw input reaching validation.
fn rule_sections_min(config: &ShelfConfig, _: &DerivedQuantities) -> Option<RuleMessage> {
    (config.sections < MIN_SECTIONS).then(|| {
        RuleMessage::error(
            RuleCode::SectionsMin,
            format!("At least {MIN_SECTIONS} section is required"),
        )
    })
}

fn rule_levels_min(config: &ShelfConfig, _: &DerivedQuantities) -> Option<RuleMessage> {
    (config.levels < MIN_LEVELS).then(|| {
        RuleMessage::error(
            RuleCode::LevelsMin,
            format!("At least {MIN_LEVELS} level is required"),
        )
    })
}

// Panels always ship in pairs; odd totals are rounded up to full packs.
fn rule_panel_pairing(_: &ShelfConfig, derived: &DerivedQuantities) -> Option<RuleMessage> {
    (derived.total_panels % PANELS_PER_PACK != 0).then(|| {
        RuleMessage::info(
            RuleCode::PanelPairing,
            format!(
                "Panels ship in pairs: {} requested, {} will be shipped",
                derived.total_panels,
                derived.panel_packs.saturating_mul(PANELS_PER_PACK)
            ),
        )
    })
}

fn rule_satin_on_metal(config: &ShelfConfig, _: &DerivedQuantities) -> Option<RuleMessage> {
    (config.finish == Finish::Satin && config.material != Material::Glass).then(|| {
        RuleMessage::warning(
            RuleCode::SatinOnMetal,
            "Satin finish is only available for glass shelves".to_string(),
        )
    })
}

// Cannot fit more front modules than physical compartments.
fn rule_fronts_vs_compartments(config: &ShelfConfig, derived: &DerivedQuantities) -> Option<RuleMessage> {
    let fronts = config.modules.fronts_total();
    (fronts > derived.compartments).then(|| {
        RuleMessage::error(
            RuleCode::TooManyFronts,
            format!(
                "Too many front modules: {} configured for {} compartments",
                fronts, derived.compartments
            ),
        )
    })
}

fn rule_doors_in_pairs(config: &ShelfConfig, _: &DerivedQuantities) -> Option<RuleMessage> {
    (config.modules.doors40 % 2 != 0).then(|| {
        RuleMessage::warning(
            RuleCode::DoorsNotPaired,
            format!(
                "Hinged doors are usually mounted in pairs: {} configured",
                config.modules.doors40
            ),
        )
    })
}

// Independent cap; also covered by the aggregate fronts rule.
fn rule_double_drawer_overflow(config: &ShelfConfig, derived: &DerivedQuantities) -> Option<RuleMessage> {
    (config.modules.double_drawers80 > derived.compartments).then(|| {
        RuleMessage::error(
            RuleCode::DoubleDrawerOverflow,
            format!(
                "Double drawers exceed compartments: {} > {}",
                config.modules.double_drawers80, derived.compartments
            ),
        )
    })
}

fn rule_glass_accessories(config: &ShelfConfig, derived: &DerivedQuantities) -> Option<RuleMessage> {
    (config.material == Material::Glass).then(|| {
        RuleMessage::info(
            RuleCode::GlassAccessories,
            format!(
                "Glass configuration adds {} corner protectors",
                derived.corner_protectors_qty
            ),
        )
    })
}

fn rule_glass_stabilizer(config: &ShelfConfig, derived: &DerivedQuantities) -> Option<RuleMessage> {
    (config.material == Material::Glass && derived.stabilizer_rod_qty > 0).then(|| {
        RuleMessage::info(
            RuleCode::GlassStabilizer,
            format!(
                "Wide glass configuration adds {} stabilizer rods",
                derived.stabilizer_rod_qty
            ),
        )
    })
}

// =============================================================================
// Validator
// =============================================================================

/// Runs the full rule battery against a configuration.
///
/// Derives quantities internally, then evaluates every rule in fixed
/// order. Invalid configurations still return their full message list so
/// the UI can display all findings at once.
pub fn validate(config: &ShelfConfig) -> Vec<RuleMessage> {
    let derived = derive(config);
    RULES
        .iter()
        .filter_map(|rule| rule(config, &derived))
        .collect()
}

/// A configuration is valid iff no message carries severity Error.
#[inline]
pub fn is_valid(messages: &[RuleMessage]) -> bool {
    !messages.iter().any(|m| m.severity == Severity::Error)
}

// =============================================================================
// Unit Tests
// =============================================================================
