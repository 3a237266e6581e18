//! Entry point for the `relay-gateway` HTTP server.

use std::sync::Arc;

use relay_gateway::{routes::create_router, state::AppState};
use relay_outbound::{HttpTransport, RelayConfig};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match RelayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "partner configuration incomplete");
            std::process::exit(1);
        }
    };

    let addr = std::env::var("RELAY_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_owned());

    let state = Arc::new(AppState::new(HttpTransport::new(), config));
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "relay-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
