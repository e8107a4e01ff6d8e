//! HTTP route handlers.
//!
//! Thin wrappers over the pure core: deserialize, call core functions,
//! map the result onto HTTP. No business decisions are made here.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use regal_core::bom::{assemble, bom_total, BomLine};
use regal_core::catalog::Catalog;
use regal_core::config::{normalize, ShelfConfig};
use regal_core::derive::{derive, DerivedQuantities};
use regal_core::money::Money;
use regal_core::payload::{validate_minimal, QuotePayload};
use regal_core::rules::{is_valid, validate, RuleMessage};
use regal_export::store::QuoteReceipt;

use crate::error::ApiError;
use crate::AppState;

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/configurations/validate", post(validate_configuration))
        .route("/api/configurations/bom", post(build_bom))
        .route("/api/quotes", post(submit_quote))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

async fn health() -> &'static str {
    "ok"
}

/// Response bundle the configurator UI consumes after every config change.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationResponse {
    config: ShelfConfig,
    derived: DerivedQuantities,
    messages: Vec<RuleMessage>,
    valid: bool,
}

/// Normalizes and validates a configuration.
///
/// Always 200: validation findings are data, not transport failures.
async fn validate_configuration(Json(raw): Json<ShelfConfig>) -> Json<ValidationResponse> {
    // Apply patch, then normalize - a raw config is never used directly
    let config = normalize(&raw);
    let messages = validate(&config);
    let valid = is_valid(&messages);
    let derived = derive(&config);
    Json(ValidationResponse {
        config,
        derived,
        messages,
        valid,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BomResponse {
    bom: Vec<BomLine>,
    total: Money,
}

/// Assembles the priced BOM for a valid configuration.
///
/// Invalid configurations get a 422 carrying the full message list.
async fn build_bom(Json(raw): Json<ShelfConfig>) -> Result<Json<BomResponse>, ApiError> {
    let config = normalize(&raw);
    let messages = validate(&config);
    if !is_valid(&messages) {
        return Err(ApiError::InvalidConfiguration(messages));
    }

    let bom = assemble(&config, Catalog::standard())?;
    let total = bom_total(&bom);
    Ok(Json(BomResponse { bom, total }))
}

/// Persists a quote request.
///
/// The boundary check runs on the loose JSON body before the typed
/// deserialization, so shape problems surface as a 400 with findings
/// rather than an opaque deserialization failure.
async fn submit_quote(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<QuoteReceipt>), ApiError> {
    let problems = validate_minimal(&raw);
    if !problems.is_empty() {
        return Err(ApiError::InvalidPayload(problems));
    }

    let payload: QuotePayload = serde_json::from_value(raw)
        .map_err(|err| ApiError::InvalidPayload(vec![err.to_string()]))?;

    let receipt = state.store.save(&payload)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use regal_export::store::QuoteStore;
    use serde_json::json;
    use tower::ServiceExt;

    fn test_router(dir: &std::path::Path) -> Router {
        router(Arc::new(AppState {
            store: QuoteStore::new(dir),
        }))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn sample_config() -> serde_json::Value {
        json!({
            "width": 38, "height": 80,
            "sections": 3, "levels": 2,
            "material": "metal", "finish": "white"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(dir.path())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_validate_endpoint_accepts_config() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(dir.path())
            .oneshot(post_json("/api/configurations/validate", sample_config()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_bom_endpoint_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = sample_config();
        config["sections"] = json!(2);
        config["levels"] = json!(1);
        config["modules"] = json!({ "doors40": 4 }); // 4 fronts > 2 compartments
        let response = test_router(dir.path())
            .oneshot(post_json("/api/configurations/bom", config))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_bom_endpoint_builds_bom() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(dir.path())
            .oneshot(post_json("/api/configurations/bom", sample_config()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_quote_endpoint_rejects_bad_payload() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_router(dir.path())
            .oneshot(post_json("/api/quotes", json!({ "bom": [] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
