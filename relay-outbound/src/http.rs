//! HTTPS transport over reqwest.
//!
//! One synchronous round trip per call: no retries, no configured
//! timeout, no connection pooling assumptions beyond reqwest's
//! defaults.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::PartnerProfile;
use crate::transport::{PartnerReply, PartnerTransport};
use crate::OutboundError;

/// [`PartnerTransport`] backed by a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a default TLS-capable client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartnerTransport for HttpTransport {
    async fn post_document(
        &self,
        profile: &PartnerProfile,
        document: &Value,
    ) -> Result<PartnerReply, OutboundError> {
        let response = self
            .client
            .post(&profile.endpoint)
            .basic_auth(&profile.username, Some(&profile.password))
            .json(document)
            .send()
            .await
            .map_err(|e| classify_send_error(profile, &e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| OutboundError::Request {
            partner: profile.partner,
            reason: format!("read response body: {e}"),
        })?;

        Ok(PartnerReply { status, body })
    }
}

/// Connection establishment covers TCP and the TLS handshake; anything
/// failing there surfaces as the secure-channel error. Failures after
/// the channel exists (bad URL, interrupted body) are plain request
/// errors.
fn classify_send_error(profile: &PartnerProfile, error: &reqwest::Error) -> OutboundError {
    if error.is_connect() {
        OutboundError::SecureChannel { partner: profile.partner }
    } else {
        OutboundError::Request { partner: profile.partner, reason: error.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Partner;

    // Network-dependent behavior is covered by the scripted transports
    // in the forwarder and gateway tests; here we only pin the error
    // shape for an endpoint that is not even a URL.
    #[tokio::test]
    async fn malformed_endpoint_is_a_request_error() {
        let transport = HttpTransport::new();
        let profile =
            PartnerProfile::new(Partner::Fareva, "not a url", "user", "pass");
        let result = transport
            .post_document(&profile, &serde_json::json!({}))
            .await;
        match result {
            Err(OutboundError::Request { partner, .. }) => assert_eq!(partner, Partner::Fareva),
            other => panic!("expected Request error, got {other:?}"),
        }
    }
}
