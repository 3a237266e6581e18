//! Shared application state: one forwarder per partner.

use relay_outbound::{Forwarder, PartnerTransport, RelayConfig};

/// Read-only state shared by all request handlers.
///
/// Generic over the transport so tests can swap the HTTPS client for a
/// scripted double.
pub struct AppState<T: PartnerTransport> {
    /// Purchase orders go to Fareva.
    pub fareva: Forwarder<T>,
    /// Load plans go to LCT.
    pub lct: Forwarder<T>,
}

impl<T: PartnerTransport + Clone> AppState<T> {
    /// Wires one transport to both partner profiles.
    #[must_use]
    pub fn new(transport: T, config: RelayConfig) -> Self {
        Self {
            fareva: Forwarder::new(transport.clone(), config.fareva),
            lct: Forwarder::new(transport, config.lct),
        }
    }
}
