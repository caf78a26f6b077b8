//! Rendering of aggregate results, human-readable and JSON.

use quorum_dns_application::services::consensus::canonical_key;
use quorum_dns_domain::{AggregateResult, Answer, QueryOutcome, RecordType};
use serde_json::{json, Value};

fn agreeing(result: &AggregateResult) -> usize {
    if result.consensus.is_empty() {
        return 0;
    }
    let key = canonical_key(&result.consensus);
    result
        .successes
        .iter()
        .filter(|o| !o.answers.is_empty() && canonical_key(&o.answers) == key)
        .count()
}

fn print_answers(answers: &[Answer], indent: &str) {
    for answer in answers {
        println!("{}- {} (TTL: {}s)", indent, answer.data, answer.ttl);
    }
}

pub fn print_lookup(domain: &str, record_type: RecordType, result: &AggregateResult) {
    println!("Domain: {}", domain);
    println!("Type: {}", record_type);

    match &result.best {
        Some(best) => {
            println!();
            println!("Answers:");
            print_answers(&best.answers, "  ");
            println!();
            println!("Resolver: {} ({}ms)", best.resolver.name, best.latency_ms);
            println!(
                "Consensus: {}/{} resolvers agree",
                agreeing(result),
                result.succeeded()
            );
        }
        None => {
            println!();
            println!("No resolver returned an answer.");
        }
    }

    println!(
        "Resolvers: {} succeeded, {} failed, {} total",
        result.succeeded(),
        result.failed(),
        result.total()
    );
}

pub fn print_debug(domain: &str, record_type: RecordType, result: &AggregateResult) {
    println!("Domain: {}", domain);
    println!("Type: {}", record_type);
    println!("Resolvers: {}", result.total());

    println!();
    println!("=== Successful ===");
    if result.successes.is_empty() {
        println!("(none)");
    }
    for outcome in &result.successes {
        println!();
        println!("{} <{}> {}ms", outcome.resolver.name, outcome.resolver.endpoint, outcome.latency_ms);
        if outcome.answers.is_empty() {
            println!("  no records");
        } else {
            print_answers(&outcome.answers, "  ");
        }
    }

    println!();
    println!("=== Failed ===");
    if result.failures.is_empty() {
        println!("(none)");
    }
    for outcome in &result.failures {
        println!();
        println!("{} <{}> {}ms", outcome.resolver.name, outcome.resolver.endpoint, outcome.latency_ms);
        if let Some(error) = &outcome.error {
            println!("  error: {}", error);
        }
    }

    if !result.consensus.is_empty() {
        println!();
        println!("=== Consensus ===");
        print_answers(&result.consensus, "");
    }
}

fn answer_json(answer: &Answer) -> Value {
    json!({
        "type": answer.rtype,
        "ttl": answer.ttl,
        "data": answer.data,
    })
}

fn outcome_json(outcome: &QueryOutcome) -> Value {
    let mut value = json!({
        "serverName": outcome.resolver.name,
        "server": outcome.resolver.endpoint,
        "success": outcome.is_success(),
        "responseTime": outcome.latency_ms,
    });
    if outcome.is_success() {
        value["answers"] = outcome.answers.iter().map(answer_json).collect();
    } else if let Some(error) = &outcome.error {
        value["error"] = json!(error.to_string());
    }
    value
}

pub fn lookup_json(domain: &str, record_type: RecordType, result: &AggregateResult) -> Value {
    json!({
        "success": result.best.is_some(),
        "domain": domain,
        "type": record_type.as_str(),
        "answers": result.best.as_ref().map_or_else(Vec::new, |b| {
            b.answers.iter().map(answer_json).collect()
        }),
        "serverName": result.best.as_ref().map(|b| b.resolver.name.clone()),
        "responseTime": result.best.as_ref().map(|b| b.latency_ms),
        "consensus": result.consensus.iter().map(answer_json).collect::<Vec<_>>(),
        "totalServers": result.total(),
        "successfulServers": result.succeeded(),
        "failedServers": result.failed(),
    })
}

pub fn debug_json(domain: &str, record_type: RecordType, result: &AggregateResult) -> Value {
    json!({
        "domain": domain,
        "type": record_type.as_str(),
        "servers": {
            "success": result.successes.iter().map(outcome_json).collect::<Vec<_>>(),
            "failed": result.failures.iter().map(outcome_json).collect::<Vec<_>>(),
        },
        "consensus": result.consensus.iter().map(answer_json).collect::<Vec<_>>(),
        "totalServers": result.total(),
        "successfulServers": result.succeeded(),
        "failedServers": result.failed(),
    })
}
