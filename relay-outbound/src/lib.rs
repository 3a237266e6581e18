//! Outbound document delivery for the partner relay.
//!
//! Resolves partner destinations and credentials from the environment
//! once at startup, then forwards JSON documents with a single
//! basic-auth HTTPS POST per request. No retries, no buffering.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod forwarder;
pub mod http;
pub mod transport;

pub use config::{Partner, PartnerProfile, RelayConfig};
pub use error::OutboundError;
pub use forwarder::Forwarder;
pub use http::HttpTransport;
pub use transport::{PartnerReply, PartnerTransport};
