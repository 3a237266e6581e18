//! Delivery of a document to one partner, wrapping a [`PartnerTransport`].

use serde_json::Value;

use crate::config::{Partner, PartnerProfile};
use crate::transport::PartnerTransport;
use crate::OutboundError;

/// Status a partner returns when it has accepted a document.
const ACCEPTED: u16 = 202;

/// Forwards documents to a single partner.
///
/// Stateless apart from the read-only profile; safe to share across
/// request handlers.
pub struct Forwarder<T: PartnerTransport> {
    transport: T,
    profile: PartnerProfile,
}

impl<T: PartnerTransport> Forwarder<T> {
    /// Creates a forwarder for the given partner profile.
    #[must_use]
    pub fn new(transport: T, profile: PartnerProfile) -> Self {
        Self { transport, profile }
    }

    /// The partner this forwarder delivers to.
    #[must_use]
    pub fn partner(&self) -> Partner {
        self.profile.partner
    }

    /// Delivers `document` in exactly one outbound attempt.
    ///
    /// # Errors
    /// Returns [`OutboundError::Rejected`] when the partner answers
    /// with anything other than 202, and propagates transport errors
    /// unchanged.
    pub async fn deliver(&self, document: &Value) -> Result<(), OutboundError> {
        let reply = self.transport.post_document(&self.profile, document).await?;
        if reply.status == ACCEPTED {
            tracing::info!(partner = %self.profile.partner, "document accepted");
            Ok(())
        } else {
            tracing::warn!(
                partner = %self.profile.partner,
                status = reply.status,
                "document rejected"
            );
            Err(OutboundError::Rejected {
                partner: self.profile.partner,
                status: reply.status,
                body: reply.body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::transport::PartnerReply;

    /// Answers every call with a fixed status/body and records the
    /// documents it was given.
    #[derive(Clone)]
    struct ScriptedTransport {
        status: u16,
        body: &'static str,
        seen: Arc<Mutex<Vec<Value>>>,
    }

    impl ScriptedTransport {
        fn replying(status: u16, body: &'static str) -> Self {
            Self { status, body, seen: Arc::new(Mutex::new(Vec::new())) }
        }
    }

    #[async_trait]
    impl PartnerTransport for ScriptedTransport {
        async fn post_document(
            &self,
            _profile: &PartnerProfile,
            document: &Value,
        ) -> Result<PartnerReply, OutboundError> {
            self.seen
                .lock()
                .expect("scripted transport lock poisoned")
                .push(document.clone());
            Ok(PartnerReply { status: self.status, body: self.body.to_owned() })
        }
    }

    struct NoChannelTransport;

    #[async_trait]
    impl PartnerTransport for NoChannelTransport {
        async fn post_document(
            &self,
            profile: &PartnerProfile,
            _document: &Value,
        ) -> Result<PartnerReply, OutboundError> {
            Err(OutboundError::SecureChannel { partner: profile.partner })
        }
    }

    fn profile() -> PartnerProfile {
        PartnerProfile::new(Partner::Fareva, "https://edi.fareva.test/po", "relay", "pw")
    }

    #[tokio::test]
    async fn accepted_status_delivers_ok() {
        let forwarder = Forwarder::new(ScriptedTransport::replying(202, ""), profile());
        let result = forwarder.deliver(&json!({"orderId": "1"})).await;
        assert!(result.is_ok(), "202 must be acceptance: {result:?}");
    }

    #[tokio::test]
    async fn non_accepted_status_is_rejected_with_status_and_body() {
        let forwarder = Forwarder::new(ScriptedTransport::replying(500, "boom"), profile());
        let err = match forwarder.deliver(&json!({"orderId": "1"})).await {
            Ok(()) => panic!("500 must not be acceptance"),
            Err(e) => e,
        };
        match &err {
            OutboundError::Rejected { partner, status, body } => {
                assert_eq!(*partner, Partner::Fareva);
                assert_eq!(*status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("500") && msg.contains("boom"), "message incomplete: {msg}");
    }

    #[tokio::test]
    async fn ok_200_is_still_a_rejection() {
        let forwarder = Forwarder::new(ScriptedTransport::replying(200, "ok"), profile());
        let result = forwarder.deliver(&json!({})).await;
        assert!(
            matches!(result, Err(OutboundError::Rejected { status: 200, .. })),
            "only 202 counts as acceptance: {result:?}"
        );
    }

    #[tokio::test]
    async fn transport_errors_propagate_unchanged() {
        let forwarder = Forwarder::new(NoChannelTransport, profile());
        let result = forwarder.deliver(&json!({})).await;
        assert!(
            matches!(result, Err(OutboundError::SecureChannel { partner: Partner::Fareva })),
            "secure-channel failure must pass through: {result:?}"
        );
    }

    #[tokio::test]
    async fn document_reaches_the_transport_unmodified() {
        let transport = ScriptedTransport::replying(202, "");
        let forwarder = Forwarder::new(transport.clone(), profile());
        let document = json!({"nested": {"deep": [1, 2, {"x": null}]}, "free": "form"});
        forwarder
            .deliver(&document)
            .await
            .expect("scripted 202 must deliver");
        let seen = transport.seen.lock().expect("lock poisoned");
        assert_eq!(seen.len(), 1, "exactly one outbound call");
        assert_eq!(seen[0], document, "the document must reach the transport unmodified");
    }
}
