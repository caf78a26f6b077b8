use crate::answer::Answer;
use crate::errors::DomainError;
use crate::resolver::ResolverDescriptor;

/// The settled result of one resolver round trip.
///
/// Exactly one of `answers` / `error` is meaningful: a success carries
/// the decoded answer list (possibly empty), a failure carries the
/// error. Latency is recorded on both paths.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub resolver: ResolverDescriptor,
    pub answers: Vec<Answer>,
    pub error: Option<DomainError>,
    pub latency_ms: u64,
}

impl QueryOutcome {
    pub fn success(resolver: ResolverDescriptor, answers: Vec<Answer>, latency_ms: u64) -> Self {
        Self {
            resolver,
            answers,
            error: None,
            latency_ms,
        }
    }

    pub fn failure(resolver: ResolverDescriptor, error: DomainError, latency_ms: u64) -> Self {
        Self {
            resolver,
            answers: Vec::new(),
            error: Some(error),
            latency_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_timeout(&self) -> bool {
        self.error.as_ref().is_some_and(DomainError::is_timeout)
    }
}

/// Everything `resolve_all` learned from one fan-out over the resolver
/// set. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    /// Successful outcomes in resolver configuration order.
    pub successes: Vec<QueryOutcome>,

    /// Failed outcomes in resolver configuration order.
    pub failures: Vec<QueryOutcome>,

    /// The majority answer set, taken verbatim from one success.
    /// Empty when no resolver succeeded.
    pub consensus: Vec<Answer>,

    /// Fastest success agreeing with the consensus, if any succeeded.
    pub best: Option<QueryOutcome>,
}

impl AggregateResult {
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn succeeded(&self) -> usize {
        self.successes.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}
