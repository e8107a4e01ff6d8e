//! API error types and their HTTP mapping.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InvalidConfiguration  → 422  rule errors, full message list attached  │
//! │  InvalidPayload        → 400  boundary check findings attached         │
//! │  Core / Export         → 500  unexpected internal failures             │
//! │                                                                         │
//! │  Invalid input is ALWAYS a client error, never a 500.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use regal_core::error::CoreError;
use regal_core::rules::RuleMessage;
use regal_export::error::ExportError;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configuration failed rule validation.
    #[error("configuration has validation errors")]
    InvalidConfiguration(Vec<RuleMessage>),

    /// The quote payload failed the boundary shape check.
    #[error("quote payload failed boundary validation")]
    InvalidPayload(Vec<String>),

    /// Core failure (catalog lookup miss).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Export/persistence failure.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidConfiguration(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "invalid_configuration",
                    "messages": messages,
                })),
            )
                .into_response(),

            ApiError::InvalidPayload(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_payload",
                    "details": details,
                })),
            )
                .into_response(),

            // The store re-runs the boundary check; map its refusal to a
            // client error as well
            ApiError::Export(ExportError::InvalidPayload(details)) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_payload",
                    "details": details,
                })),
            )
                .into_response(),

            ApiError::Core(err) => {
                error!(%err, "core failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal" })),
                )
                    .into_response()
            }

            ApiError::Export(err) => {
                error!(%err, "export failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal" })),
                )
                    .into_response()
            }
        }
    }
}
