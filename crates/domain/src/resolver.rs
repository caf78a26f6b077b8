use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A DoH resolver endpoint as supplied by configuration.
///
/// The endpoint must accept POST requests with an
/// `application/dns-message` body. The core never owns a resolver
/// registry; callers pass an ordered list of these per call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolverDescriptor {
    /// Human label used for attribution in results ("Cloudflare").
    pub name: String,

    /// HTTPS URL of the DoH endpoint.
    pub endpoint: String,
}

impl ResolverDescriptor {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::Config("Resolver name cannot be empty".into()));
        }
        if !self.endpoint.starts_with("https://") {
            return Err(DomainError::Config(format!(
                "Resolver '{}' endpoint must be an https:// URL, got '{}'",
                self.name, self.endpoint
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ResolverDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.endpoint)
    }
}
