pub mod https;

use async_trait::async_trait;
use quorum_dns_domain::{DomainError, ResolverDescriptor};

pub use https::HttpsTransport;

/// One DoH exchange: raw query bytes out, raw response bytes back.
///
/// Implementations own the HTTP mechanics; deadlines are imposed by the
/// caller, which drops the in-flight future on timeout.
#[async_trait]
pub trait DohTransport: Send + Sync {
    async fn send(
        &self,
        resolver: &ResolverDescriptor,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError>;
}
