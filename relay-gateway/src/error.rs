//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use relay_core::ValidationError;
use relay_outbound::OutboundError;

/// Errors that can occur during relay request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The inbound body failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The outbound delivery failed or was rejected by the partner.
    #[error(transparent)]
    Outbound(#[from] OutboundError),

    /// The validated document could not be re-serialized.
    #[error("failed to serialize outbound payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Validation(err) => {
                let issues: Vec<_> = err
                    .issues
                    .iter()
                    .map(|i| json!({"path": i.path, "message": i.kind.to_string()}))
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "document does not match the purchase order schema",
                        "issues": issues,
                    })),
                )
                    .into_response()
            }
            // The secure-channel failure is a caller-visible plain-text
            // message, not the JSON gateway error.
            GatewayError::Outbound(err @ OutboundError::SecureChannel { .. }) => {
                (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
            }
            GatewayError::Outbound(err) => {
                (StatusCode::BAD_GATEWAY, Json(json!({"error": err.to_string()}))).into_response()
            }
            GatewayError::Serialize(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("failed to serialize outbound payload: {err}")})),
            )
                .into_response(),
        }
    }
}
