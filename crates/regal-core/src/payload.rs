//! # Quote Payload Module
//!
//! The assembled export payload and its boundary shape check.
//!
//! ## Why a Second Validator?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: RuleValidator (rules module)                                 │
//! │  └── Full business-rule battery over a typed configuration             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - validate_minimal                               │
//! │  └── Last-line-of-defense shape check on loose JSON before a quote     │
//! │      is persisted or forwarded. Deliberately shallower: structural     │
//! │      completeness only, no business rules re-run.                      │
//! │                                                                         │
//! │  Defense in depth: the two layers catch different failure modes.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::bom::BomLine;
use crate::config::ShelfConfig;
use crate::money::Money;

// =============================================================================
// Payload Types
// =============================================================================

/// Customer contact data attached to a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
}

/// A complete quote request: configuration plus its assembled BOM.
///
/// Downstream export encoders (ERP, CSV) consume this shape; the core
/// guarantees only that BOM lines are non-zero-quantity and
/// category-tagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub customer: CustomerInfo,
    pub config: ShelfConfig,
    pub bom: Vec<BomLine>,
    pub total: Money,
}

// =============================================================================
// Boundary Check
// =============================================================================

const ALLOWED_WIDTHS: [u64; 2] = [38, 75];
const ALLOWED_HEIGHTS: [u64; 5] = [80, 120, 160, 200, 240];
const ALLOWED_MATERIALS: [&str; 2] = ["metal", "glass"];

/// Minimal shape/range check on an assembled export payload.
///
/// Returns a flat list of error strings; empty means acceptable. The
/// caller decides what to do with failures (typically a 400-class HTTP
/// response or a refused persist).
///
/// Operates on loose JSON deliberately: this is the one place where enum
/// membership of width/height/material is checked by value, since
/// everything upstream of the typed deserializer is out of the core's
/// hands.
pub fn validate_minimal(payload: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    let config = &payload["config"];

    if config.is_null() {
        errors.push("config is required".to_string());
        return errors;
    }

    match config["width"].as_u64() {
        Some(width) if ALLOWED_WIDTHS.contains(&width) => {}
        _ => errors.push("config.width must be 38 or 75".to_string()),
    }

    match config["height"].as_u64() {
        Some(height) if ALLOWED_HEIGHTS.contains(&height) => {}
        _ => errors.push("config.height must be one of 80, 120, 160, 200, 240".to_string()),
    }

    match config["sections"].as_u64() {
        Some(sections) if sections >= 1 => {}
        _ => errors.push("config.sections must be at least 1".to_string()),
    }

    match config["levels"].as_u64() {
        Some(levels) if levels >= 1 => {}
        _ => errors.push("config.levels must be at least 1".to_string()),
    }

    match config["material"].as_str() {
        Some(material) if ALLOWED_MATERIALS.contains(&material) => {}
        _ => errors.push("config.material must be metal or glass".to_string()),
    }

    if config["finish"].is_null() {
        errors.push("config.finish is required".to_string());
    }

    match payload["bom"].as_array() {
        Some(bom) if !bom.is_empty() => {}
        _ => errors.push("bom must be a non-empty array".to_string()),
    }

    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "customer": { "name": "A. Kunde", "email": "kunde@example.com", "company": null },
            "config": {
                "width": 38, "height": 80,
                "sections": 3, "levels": 2,
                "material": "metal", "finish": "white"
            },
            "bom": [
                { "sku": "RGL-UPR-80", "name": "Upright 80 cm", "qty": 4,
                  "unit": "pcs", "category": "upright",
                  "unitPrice": 1990, "lineTotal": 7960, "note": null }
            ],
            "total": 7960
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(validate_minimal(&valid_payload()).is_empty());
    }

    #[test]
    fn test_missing_config_short_circuits() {
        let errors = validate_minimal(&json!({ "bom": [] }));
        assert_eq!(errors, vec!["config is required"]);
    }

    #[test]
    fn test_bad_width_and_height() {
        let mut payload = valid_payload();
        payload["config"]["width"] = json!(40); // ERP code, not a UI value
        payload["config"]["height"] = json!(90);
        let errors = validate_minimal(&payload);
        assert!(errors.iter().any(|e| e.contains("width")));
        assert!(errors.iter().any(|e| e.contains("height")));
    }

    #[test]
    fn test_zero_sections_rejected() {
        let mut payload = valid_payload();
        payload["config"]["sections"] = json!(0);
        let errors = validate_minimal(&payload);
        assert!(errors.iter().any(|e| e.contains("sections")));
    }

    #[test]
    fn test_unknown_material_rejected() {
        let mut payload = valid_payload();
        payload["config"]["material"] = json!("wood");
        let errors = validate_minimal(&payload);
        assert!(errors.iter().any(|e| e.contains("material")));
    }

    #[test]
    fn test_missing_finish_rejected() {
        let mut payload = valid_payload();
        payload["config"].as_object_mut().unwrap().remove("finish");
        let errors = validate_minimal(&payload);
        assert!(errors.iter().any(|e| e.contains("finish")));
    }

    #[test]
    fn test_empty_bom_rejected() {
        let mut payload = valid_payload();
        payload["bom"] = json!([]);
        let errors = validate_minimal(&payload);
        assert!(errors.iter().any(|e| e.contains("bom")));
    }

    #[test]
    fn test_shallow_by_design() {
        // Business rules are NOT re-run: a payload whose module counts
        // exceed its compartments still passes the boundary check.
        let mut payload = valid_payload();
        payload["config"]["modules"] = json!({ "doors40": 99 });
        assert!(validate_minimal(&payload).is_empty());
    }

    #[test]
    fn test_typed_payload_roundtrip() {
        let payload: QuotePayload = serde_json::from_value(valid_payload()).unwrap();
        assert_eq!(payload.bom.len(), 1);
        assert_eq!(payload.total, Money::from_cents(7960));
        let raw = serde_json::to_value(&payload).unwrap();
        assert!(validate_minimal(&raw).is_empty());
    }
}
