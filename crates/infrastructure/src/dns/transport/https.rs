//! DNS-over-HTTPS transport (RFC 8484).
//!
//! Queries travel as the raw binary body of an HTTPS POST with
//! `application/dns-message` content type; the response body is a
//! binary DNS message in the same format.

use std::sync::LazyLock;

use async_trait::async_trait;
use quorum_dns_domain::{DomainError, ResolverDescriptor};
use tracing::debug;

use super::DohTransport;

/// Shared HTTP client with connection pooling across all resolvers.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Content type for DNS-over-HTTPS messages (RFC 8484 §4.1, §4.2.1).
const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsTransport;

impl HttpsTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DohTransport for HttpsTransport {
    async fn send(
        &self,
        resolver: &ResolverDescriptor,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        debug!(
            resolver = %resolver.name,
            url = %resolver.endpoint,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        let response = SHARED_CLIENT
            .post(&resolver.endpoint)
            .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
            .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
            .body(message_bytes.to_vec())
            .send()
            .await
            .map_err(|e| DomainError::Transport {
                server: resolver.name.clone(),
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Transport {
                server: resolver.name.clone(),
                detail: format!(
                    "HTTP {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let response_bytes = response.bytes().await.map_err(|e| DomainError::Transport {
            server: resolver.name.clone(),
            detail: format!("failed to read response body: {e}"),
        })?;

        debug!(
            resolver = %resolver.name,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(response_bytes.to_vec())
    }
}
