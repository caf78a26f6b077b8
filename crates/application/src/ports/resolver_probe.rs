use std::time::Duration;

use async_trait::async_trait;
use quorum_dns_domain::{QueryOutcome, RecordType, ResolverDescriptor};

/// One round trip against a single resolver endpoint.
///
/// Implementations must settle within (roughly) the given timeout and
/// must never panic: every failure mode is folded into the returned
/// `QueryOutcome`. Exactly one attempt per call; retries are nobody's
/// business at this seam.
#[async_trait]
pub trait ResolverProbe: Send + Sync {
    async fn query(
        &self,
        resolver: &ResolverDescriptor,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> QueryOutcome;
}
