#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use quorum_dns_application::ResolverProbe;
use quorum_dns_domain::{Answer, DomainError, QueryOutcome, RecordType, ResolverDescriptor};

/// What a scripted resolver does when probed.
#[derive(Debug, Clone)]
pub enum ProbeScript {
    /// Respond with these A-record data values after `latency_ms`.
    Answers { data: Vec<String>, latency_ms: u64 },
    /// Respond successfully but with no answers.
    Empty { latency_ms: u64 },
    /// Fail with an HTTP error after `latency_ms`.
    HttpError { status: u16, latency_ms: u64 },
    /// Never respond; the probe gives up at the timeout.
    Hang,
}

/// A `ResolverProbe` that follows a per-resolver script, sleeping on the
/// tokio clock so `start_paused` tests stay deterministic.
pub struct ScriptedProbe {
    scripts: HashMap<String, ProbeScript>,
}

impl ScriptedProbe {
    pub fn new(scripts: impl IntoIterator<Item = (&'static str, ProbeScript)>) -> Self {
        Self {
            scripts: scripts
                .into_iter()
                .map(|(name, script)| (name.to_string(), script))
                .collect(),
        }
    }
}

#[async_trait]
impl ResolverProbe for ScriptedProbe {
    async fn query(
        &self,
        resolver: &ResolverDescriptor,
        _domain: &str,
        _record_type: RecordType,
        timeout: Duration,
    ) -> QueryOutcome {
        let script = self
            .scripts
            .get(&resolver.name)
            .cloned()
            .unwrap_or(ProbeScript::Hang);

        match script {
            ProbeScript::Answers { data, latency_ms } => {
                tokio::time::sleep(Duration::from_millis(latency_ms)).await;
                let answers = data.iter().map(|d| Answer::new(1, 300, d.clone())).collect();
                QueryOutcome::success(resolver.clone(), answers, latency_ms)
            }
            ProbeScript::Empty { latency_ms } => {
                tokio::time::sleep(Duration::from_millis(latency_ms)).await;
                QueryOutcome::success(resolver.clone(), Vec::new(), latency_ms)
            }
            ProbeScript::HttpError { status, latency_ms } => {
                tokio::time::sleep(Duration::from_millis(latency_ms)).await;
                QueryOutcome::failure(
                    resolver.clone(),
                    DomainError::Transport {
                        server: resolver.name.clone(),
                        detail: format!("HTTP {status}"),
                    },
                    latency_ms,
                )
            }
            ProbeScript::Hang => {
                tokio::time::sleep(timeout).await;
                QueryOutcome::failure(
                    resolver.clone(),
                    DomainError::QueryTimeout {
                        server: resolver.name.clone(),
                        timeout_ms: timeout.as_millis() as u64,
                    },
                    timeout.as_millis() as u64,
                )
            }
        }
    }
}

pub fn resolver(name: &str) -> ResolverDescriptor {
    ResolverDescriptor::new(name, format!("https://{name}.example/dns-query"))
}

pub fn resolvers(names: &[&str]) -> Vec<ResolverDescriptor> {
    names.iter().map(|n| resolver(n)).collect()
}

pub fn answers(data: &[&str]) -> ProbeScript {
    ProbeScript::Answers {
        data: data.iter().map(|d| d.to_string()).collect(),
        latency_ms: 50,
    }
}

pub fn answers_at(data: &[&str], latency_ms: u64) -> ProbeScript {
    ProbeScript::Answers {
        data: data.iter().map(|d| d.to_string()).collect(),
        latency_ms,
    }
}
