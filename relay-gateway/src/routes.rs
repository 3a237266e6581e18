//! Axum route handlers for the partner relay API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use relay_core::PurchaseOrder;
use relay_outbound::PartnerTransport;

use crate::{error::GatewayError, state::AppState};

/// Body returned to the caller when the partner accepts a document.
/// Wire string, typo included; downstream integrations match on it.
const CONFIRMATION: &str = "Succesfully processed.";

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given state.
pub fn create_router<T: PartnerTransport + 'static>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        .route("/frv_load_po", post(load_purchase_order::<T>))
        .route("/lct_loadplan", post(load_plan::<T>))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /frv_load_po` — validate a purchase order and forward it to
/// Fareva.
///
/// The forwarded payload is the serialized form of the validated tree,
/// so unknown inbound fields never reach the partner.
///
/// # Errors
/// Returns [`GatewayError::Validation`] before any outbound call when
/// the body does not match the schema, and maps delivery failures per
/// [`GatewayError`].
pub async fn load_purchase_order<T: PartnerTransport + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, GatewayError> {
    let order = PurchaseOrder::from_document(&body)?;
    let payload = serde_json::to_value(&order)?;
    state.fareva.deliver(&payload).await?;
    Ok((StatusCode::ACCEPTED, Json(CONFIRMATION)))
}

/// `POST /lct_loadplan` — forward a load plan to LCT.
///
/// Load plans carry no declared schema; the body is relayed exactly as
/// received.
///
/// # Errors
/// Maps delivery failures per [`GatewayError`].
pub async fn load_plan<T: PartnerTransport + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, GatewayError> {
    state.lct.deliver(&body).await?;
    Ok((StatusCode::ACCEPTED, Json(CONFIRMATION)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use relay_core::examples::{example_load_plan, example_purchase_order};
    use relay_outbound::{
        OutboundError, Partner, PartnerProfile, PartnerReply, PartnerTransport, RelayConfig,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    const FAREVA_ENDPOINT: &str = "https://edi.fareva.test/po";
    const LCT_ENDPOINT: &str = "https://api.lct.test/loadplan";

    /// What the scripted partner should do with a delivery attempt.
    #[derive(Clone, Copy)]
    enum Script {
        Reply(u16, &'static str),
        NoChannel,
    }

    /// Records every outbound call and answers per the script.
    #[derive(Clone)]
    struct ScriptedTransport {
        script: Script,
        calls: Arc<Mutex<Vec<(Partner, String, Value)>>>,
    }

    impl ScriptedTransport {
        fn new(script: Script) -> Self {
            Self { script, calls: Arc::new(Mutex::new(Vec::new())) }
        }

        fn calls(&self) -> Vec<(Partner, String, Value)> {
            self.calls.lock().expect("calls lock poisoned").clone()
        }
    }

    #[async_trait]
    impl PartnerTransport for ScriptedTransport {
        async fn post_document(
            &self,
            profile: &PartnerProfile,
            document: &Value,
        ) -> Result<PartnerReply, OutboundError> {
            self.calls
                .lock()
                .expect("calls lock poisoned")
                .push((profile.partner, profile.endpoint.clone(), document.clone()));
            match self.script {
                Script::Reply(status, body) => {
                    Ok(PartnerReply { status, body: body.to_owned() })
                }
                Script::NoChannel => {
                    Err(OutboundError::SecureChannel { partner: profile.partner })
                }
            }
        }
    }

    fn test_app(script: Script) -> (Router, ScriptedTransport) {
        let transport = ScriptedTransport::new(script);
        let config = RelayConfig::new(
            PartnerProfile::new(Partner::Fareva, FAREVA_ENDPOINT, "frv-user", "frv-pass"),
            PartnerProfile::new(Partner::Lct, LCT_ENDPOINT, "lct-user", "lct-pass"),
        );
        let state = Arc::new(AppState::new(transport.clone(), config));
        (create_router(state), transport)
    }

    async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, String, String) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        let resp = app.oneshot(req).await.expect("handler runs");
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
            .await
            .expect("body reads");
        (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn purchase_order_accepted_returns_confirmation() {
        let (app, _transport) = test_app(Script::Reply(202, ""));
        let (status, _, body) = post_json(app, "/frv_load_po", &example_purchase_order()).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, "\"Succesfully processed.\"");
    }

    #[tokio::test]
    async fn purchase_order_round_trips_to_the_fareva_endpoint() {
        let (app, transport) = test_app(Script::Reply(202, ""));
        let document = example_purchase_order();
        let (status, _, _) = post_json(app, "/frv_load_po", &document).await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1, "exactly one outbound attempt");
        let (partner, endpoint, payload) = &calls[0];
        assert_eq!(*partner, Partner::Fareva);
        assert_eq!(endpoint, FAREVA_ENDPOINT);
        assert_eq!(payload, &document, "outbound payload must reproduce the validated tree");
    }

    #[tokio::test]
    async fn purchase_order_rejection_surfaces_status_and_body() {
        let (app, _transport) = test_app(Script::Reply(500, "boom"));
        let (status, _, body) = post_json(app, "/frv_load_po", &example_purchase_order()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(
            body.contains("Error 500 on Fareva API: boom"),
            "partner status and body must be embedded: {body}"
        );
    }

    #[tokio::test]
    async fn purchase_order_secure_channel_failure_is_the_fixed_plain_text() {
        let (app, _transport) = test_app(Script::NoChannel);
        let (status, content_type, body) =
            post_json(app, "/frv_load_po", &example_purchase_order()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(content_type.starts_with("text/plain"), "got {content_type}");
        assert_eq!(body, "couldn't connect with Fareva server");
    }

    #[tokio::test]
    async fn invalid_purchase_order_makes_no_outbound_call() {
        let (app, transport) = test_app(Script::Reply(202, ""));
        let mut document = example_purchase_order();
        document
            .as_object_mut()
            .expect("object root")
            .remove("orderId");

        let (status, _, body) = post_json(app, "/frv_load_po", &document).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("orderId"), "failing path must be named: {body}");
        assert!(transport.calls().is_empty(), "validation must gate forwarding");
    }

    #[tokio::test]
    async fn load_plan_is_forwarded_unmodified() {
        let (app, transport) = test_app(Script::Reply(202, ""));
        let document = example_load_plan();
        let (status, _, body) = post_json(app, "/lct_loadplan", &document).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, "\"Succesfully processed.\"");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let (partner, endpoint, payload) = &calls[0];
        assert_eq!(*partner, Partner::Lct);
        assert_eq!(endpoint, LCT_ENDPOINT);
        assert_eq!(payload, &document, "load plans are relayed as received");
    }

    #[tokio::test]
    async fn load_plan_of_any_shape_is_accepted() {
        let (app, transport) = test_app(Script::Reply(202, ""));
        let document = json!([{"totally": "schema-less"}, 42, null]);
        let (status, _, _) = post_json(app, "/lct_loadplan", &document).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(transport.calls()[0].2, document);
    }

    #[tokio::test]
    async fn load_plan_rejection_names_the_lct_partner() {
        let (app, _transport) = test_app(Script::Reply(500, "boom"));
        let (status, _, body) = post_json(app, "/lct_loadplan", &example_load_plan()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Error 500 on LCT API: boom"), "got {body}");
    }

    #[tokio::test]
    async fn load_plan_secure_channel_failure_is_the_fixed_plain_text() {
        let (app, _transport) = test_app(Script::NoChannel);
        let (status, content_type, body) =
            post_json(app, "/lct_loadplan", &example_load_plan()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(content_type.starts_with("text/plain"), "got {content_type}");
        assert_eq!(body, "couldn't connect with LCT server");
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let (app, _transport) = test_app(Script::Reply(202, ""));
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request builds");
        let resp = app.oneshot(req).await.expect("handler runs");
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024)
            .await
            .expect("body reads");
        let body: Value = serde_json::from_slice(&bytes).expect("valid JSON");
        assert_eq!(body["status"], "ok");
    }
}
