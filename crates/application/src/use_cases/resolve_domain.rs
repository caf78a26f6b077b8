use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use quorum_dns_domain::{
    AggregateResult, DomainError, QueryOutcome, RecordType, ResolverDescriptor,
};
use tracing::{debug, warn};

use crate::ports::ResolverProbe;
use crate::services::consensus;

/// Queries every configured resolver concurrently and folds the settled
/// outcomes into an `AggregateResult`.
///
/// This is wait-for-all, not race-to-first: attribution of which
/// resolver failed how is part of the result, so no outcome is ever
/// discarded early. Wall-clock cost is bounded by the slowest probe's
/// timeout, not by resolver count.
pub struct ResolveDomainUseCase {
    probe: Arc<dyn ResolverProbe>,
}

impl ResolveDomainUseCase {
    pub fn new(probe: Arc<dyn ResolverProbe>) -> Self {
        Self { probe }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
        resolvers: &[ResolverDescriptor],
    ) -> Result<AggregateResult, DomainError> {
        if resolvers.is_empty() {
            return Err(DomainError::Config("No resolvers configured".into()));
        }

        debug!(
            domain = %domain,
            record_type = %record_type,
            resolvers = resolvers.len(),
            timeout_ms = timeout.as_millis() as u64,
            "Querying all resolvers"
        );

        let handles: Vec<_> = resolvers
            .iter()
            .map(|resolver| {
                let probe = Arc::clone(&self.probe);
                let resolver = resolver.clone();
                let domain = domain.to_string();
                tokio::spawn(async move {
                    probe.query(&resolver, &domain, record_type, timeout).await
                })
            })
            .collect();

        // join_all preserves spawn order, so both partitions come out in
        // resolver configuration order.
        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for (resolver, joined) in resolvers.iter().zip(join_all(handles).await) {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(resolver = %resolver.name, error = %e, "Probe task died");
                    QueryOutcome::failure(
                        resolver.clone(),
                        DomainError::Transport {
                            server: resolver.name.clone(),
                            detail: format!("probe task failed: {e}"),
                        },
                        0,
                    )
                }
            };
            if outcome.is_success() {
                successes.push(outcome);
            } else {
                failures.push(outcome);
            }
        }

        let consensus = consensus::find_consensus(&successes);
        let best = consensus::best_outcome(&successes, &consensus);

        debug!(
            succeeded = successes.len(),
            failed = failures.len(),
            consensus_answers = consensus.len(),
            best = best.as_ref().map(|b| b.resolver.name.as_str()),
            "All resolvers settled"
        );

        Ok(AggregateResult {
            successes,
            failures,
            consensus,
            best,
        })
    }
}
