use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use quorum_dns_application::ResolverProbe;
use quorum_dns_domain::{Answer, DomainError, QueryOutcome, RecordType, ResolverDescriptor};
use tracing::debug;

use super::codec::{MessageDecoder, MessageEncoder};
use super::transport::DohTransport;

/// One encode → transport → decode round trip against a single
/// resolver, folded into a `QueryOutcome`.
///
/// The timeout is enforced here and cancels only this call's in-flight
/// request; sibling calls against other resolvers are untouched.
/// Exactly one attempt per call, no retries.
pub struct ResolverClient {
    transport: Arc<dyn DohTransport>,
}

impl ResolverClient {
    pub fn new(transport: Arc<dyn DohTransport>) -> Self {
        Self { transport }
    }

    async fn round_trip(
        &self,
        resolver: &ResolverDescriptor,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<Vec<Answer>, DomainError> {
        let query_bytes = MessageEncoder::encode(domain, record_type)?;

        let exchange = self.transport.send(resolver, &query_bytes);
        let response_bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| DomainError::QueryTimeout {
                server: resolver.name.clone(),
                timeout_ms: timeout.as_millis() as u64,
            })??;

        let message = MessageDecoder::decode(&response_bytes)?;
        Ok(message.answers)
    }
}

#[async_trait]
impl ResolverProbe for ResolverClient {
    async fn query(
        &self,
        resolver: &ResolverDescriptor,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> QueryOutcome {
        let start = Instant::now();
        let result = self.round_trip(resolver, domain, record_type, timeout).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(answers) => {
                debug!(
                    resolver = %resolver.name,
                    answers = answers.len(),
                    latency_ms = latency_ms,
                    "Resolver answered"
                );
                QueryOutcome::success(resolver.clone(), answers, latency_ms)
            }
            Err(error) => {
                debug!(
                    resolver = %resolver.name,
                    error = %error,
                    latency_ms = latency_ms,
                    "Resolver failed"
                );
                QueryOutcome::failure(resolver.clone(), error, latency_ms)
            }
        }
    }
}
