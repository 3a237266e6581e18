//! Partner transport abstraction.
//!
//! Separates the delivery logic from the HTTP stack so tests can
//! script partner behavior without a network.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::PartnerProfile;
use crate::OutboundError;

/// What a partner answered to a delivery attempt.
///
/// Constructed by transport implementations, including test doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerReply {
    /// HTTP status code returned by the partner.
    pub status: u16,
    /// Raw response body, decoded as text.
    pub body: String,
}

/// One-shot document transport to a partner API.
///
/// Implementations must be `Send + Sync` to allow use across async
/// tasks. A call performs exactly one outbound attempt; retrying is
/// the caller's decision (and this relay never retries).
#[async_trait]
pub trait PartnerTransport: Send + Sync {
    /// POST `document` as JSON to the profile's endpoint with the
    /// profile's basic-auth credentials.
    ///
    /// # Errors
    /// Returns [`OutboundError::SecureChannel`] if no connection could
    /// be established, or [`OutboundError::Request`] for any other
    /// transport failure. A response from the partner — whatever its
    /// status — is an `Ok` reply.
    async fn post_document(
        &self,
        profile: &PartnerProfile,
        document: &Value,
    ) -> Result<PartnerReply, OutboundError>;
}
