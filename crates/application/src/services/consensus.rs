//! Majority voting across resolver outcomes.
//!
//! Two resolvers "agree" when their answer sets contain the same data
//! values, regardless of record order or TTL. The canonical key makes
//! that comparison cheap: sort the data values, join them.

use quorum_dns_domain::{Answer, QueryOutcome};

/// Canonical grouping key for an answer set: data values sorted
/// lexicographically and joined by `,`. TTL and type are ignored.
pub fn canonical_key(answers: &[Answer]) -> String {
    let mut data: Vec<&str> = answers.iter().map(|a| a.data.as_str()).collect();
    data.sort_unstable();
    data.join(",")
}

/// The majority answer set among successful outcomes.
///
/// Successes with empty answer lists never form a group. Ties between
/// equally large groups go to whichever key was seen first while
/// scanning in resolver configuration order. The returned list is one
/// member's answers verbatim, never a merge.
pub fn find_consensus(successes: &[QueryOutcome]) -> Vec<Answer> {
    let mut groups: Vec<(String, &QueryOutcome, usize)> = Vec::new();

    for outcome in successes {
        if outcome.answers.is_empty() {
            continue;
        }
        let key = canonical_key(&outcome.answers);
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, count)) => *count += 1,
            None => groups.push((key, outcome, 1)),
        }
    }

    let mut max_count = 0;
    let mut consensus: &[Answer] = &[];
    for (_, outcome, count) in &groups {
        // strict > keeps the first-seen group on ties
        if *count > max_count {
            max_count = *count;
            consensus = &outcome.answers;
        }
    }

    consensus.to_vec()
}

/// The success worth presenting: fastest among those agreeing with the
/// consensus, else fastest overall. `None` when nothing succeeded.
pub fn best_outcome(successes: &[QueryOutcome], consensus: &[Answer]) -> Option<QueryOutcome> {
    if successes.is_empty() {
        return None;
    }

    let consensus_key = canonical_key(consensus);
    let fastest_matching = successes
        .iter()
        .filter(|o| !o.answers.is_empty() && canonical_key(&o.answers) == consensus_key)
        .min_by_key(|o| o.latency_ms);

    fastest_matching
        .or_else(|| successes.iter().min_by_key(|o| o.latency_ms))
        .cloned()
}
