//! Error types for outbound delivery.
//!
//! The `Rejected` and `SecureChannel` Display strings are
//! caller-visible wire messages; changing them changes the API.

use crate::config::Partner;

/// Errors that can occur while configuring or delivering to a partner.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OutboundError {
    /// A required environment variable is not set.
    #[error("missing environment variable {name}")]
    MissingVar { name: String },

    /// No secure channel could be established with the partner.
    #[error("couldn't connect with {partner} server")]
    SecureChannel { partner: Partner },

    /// The request failed after the channel was established.
    #[error("request to {partner} failed: {reason}")]
    Request { partner: Partner, reason: String },

    /// The partner answered with a non-accepted status.
    #[error("Error {status} on {partner} API: {body}")]
    Rejected { partner: Partner, status: u16, body: String },
}
