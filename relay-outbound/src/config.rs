//! Partner destination profiles resolved from the environment.
//!
//! Resolution happens once at process start; request handlers only see
//! the resulting structs.

use std::fmt;

use crate::OutboundError;

/// The downstream partners this relay can deliver to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Partner {
    /// Fareva — receives purchase orders.
    Fareva,
    /// LCT — receives load plans.
    Lct,
}

impl Partner {
    /// Prefix of this partner's environment variables.
    #[must_use]
    pub fn env_prefix(self) -> &'static str {
        match self {
            Partner::Fareva => "FRV",
            Partner::Lct => "LCT",
        }
    }
}

impl fmt::Display for Partner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partner::Fareva => write!(f, "Fareva"),
            Partner::Lct => write!(f, "LCT"),
        }
    }
}

/// Destination and credentials for one partner API.
#[derive(Clone)]
#[non_exhaustive]
pub struct PartnerProfile {
    /// The partner this profile belongs to.
    pub partner: Partner,
    /// Endpoint URL documents are POSTed to.
    pub endpoint: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
}

impl PartnerProfile {
    /// Builds a profile from explicit values.
    #[must_use]
    pub fn new(
        partner: Partner,
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            partner,
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads this partner's profile from `<PREFIX>_API_KEY`,
    /// `<PREFIX>_USER_NAME` and `<PREFIX>_PASSWORD`.
    ///
    /// `<PREFIX>_API_KEY` holds the endpoint URL; the name predates
    /// this service and is kept so existing deployments keep working.
    ///
    /// # Errors
    /// Returns [`OutboundError::MissingVar`] naming the first unset
    /// variable.
    pub fn from_env(partner: Partner) -> Result<Self, OutboundError> {
        let prefix = partner.env_prefix();
        Ok(Self {
            partner,
            endpoint: require_var(&format!("{prefix}_API_KEY"))?,
            username: require_var(&format!("{prefix}_USER_NAME"))?,
            password: require_var(&format!("{prefix}_PASSWORD"))?,
        })
    }
}

impl fmt::Debug for PartnerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartnerProfile")
            .field("partner", &self.partner)
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Profiles for both partners.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RelayConfig {
    pub fareva: PartnerProfile,
    pub lct: PartnerProfile,
}

impl RelayConfig {
    /// Builds a config from explicit profiles.
    #[must_use]
    pub fn new(fareva: PartnerProfile, lct: PartnerProfile) -> Self {
        Self { fareva, lct }
    }

    /// Resolves both partner profiles from the environment.
    ///
    /// # Errors
    /// Returns [`OutboundError::MissingVar`] if any variable is unset.
    pub fn from_env() -> Result<Self, OutboundError> {
        Ok(Self {
            fareva: PartnerProfile::from_env(Partner::Fareva)?,
            lct: PartnerProfile::from_env(Partner::Lct)?,
        })
    }
}

fn require_var(name: &str) -> Result<String, OutboundError> {
    std::env::var(name).map_err(|_| OutboundError::MissingVar { name: name.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so the missing-variable
    // and resolved cases run inside one test.
    #[test]
    fn profile_resolution_from_the_environment() {
        std::env::remove_var("FRV_API_KEY");
        std::env::remove_var("FRV_USER_NAME");
        std::env::remove_var("FRV_PASSWORD");
        match PartnerProfile::from_env(Partner::Fareva) {
            Err(OutboundError::MissingVar { name }) => assert_eq!(name, "FRV_API_KEY"),
            other => panic!("expected MissingVar, got {other:?}"),
        }

        std::env::set_var("FRV_API_KEY", "https://edi.fareva.test/po");
        std::env::set_var("FRV_USER_NAME", "relay");
        std::env::set_var("FRV_PASSWORD", "s3cret");
        let profile = match PartnerProfile::from_env(Partner::Fareva) {
            Ok(p) => p,
            Err(e) => panic!("expected a profile: {e}"),
        };
        assert_eq!(profile.partner, Partner::Fareva);
        assert_eq!(profile.endpoint, "https://edi.fareva.test/po");
        assert_eq!(profile.username, "relay");
        assert_eq!(profile.password, "s3cret");
    }

    #[test]
    fn profile_debug_redacts_the_password() {
        let profile = PartnerProfile::new(Partner::Lct, "https://lct.test", "user", "hunter2");
        let rendered = format!("{profile:?}");
        assert!(!rendered.contains("hunter2"), "password leaked: {rendered}");
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn partner_display_and_prefix() {
        assert_eq!(Partner::Fareva.to_string(), "Fareva");
        assert_eq!(Partner::Lct.to_string(), "LCT");
        assert_eq!(Partner::Fareva.env_prefix(), "FRV");
        assert_eq!(Partner::Lct.env_prefix(), "LCT");
    }
}
