//! Per-phase summary statistics.

use std::collections::BTreeMap;

use serde::Serialize;
use sw_contract::schema::{APPROVAL_MAX, APPROVAL_MIN};
use sw_contract::{Emotion, Intent, ValidatedAgentResponse};

/// One quoted verbatim and the approval it came with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub approval: u8,
    pub verbatim: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepresentativeQuotes {
    pub most_positive: Quote,
    pub most_negative: Quote,
}

/// Snapshot statistics over one phase's successful responses.
///
/// Recomputed from scratch whenever a phase is finalized; never merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseAggregate {
    pub response_count:        usize,
    /// Mean approval, rounded to 2 decimals.
    pub avg_approval:          f64,
    /// Every bucket from 1 to 10, zero when unseen.
    pub approval_distribution: BTreeMap<u8, usize>,
    /// Mean per emotion present in the batch, rounded to 3 decimals.
    pub emotion_means:         BTreeMap<Emotion, f64>,
    pub intent_counts:         BTreeMap<Intent, usize>,
    pub representative_quotes: RepresentativeQuotes,
}

/// Summarize a batch of responses.  `None` for an empty batch.
///
/// Quotes come from a stable sort by approval descending: the first element
/// is the most positive, the last the most negative, ties resolved by input
/// order.
pub fn aggregate<'a, I>(responses: I) -> Option<PhaseAggregate>
where
    I: IntoIterator<Item = &'a ValidatedAgentResponse>,
{
    let mut sorted: Vec<&ValidatedAgentResponse> = responses.into_iter().collect();
    if sorted.is_empty() {
        return None;
    }
    let n = sorted.len();

    let approval_total: u32 = sorted.iter().map(|r| u32::from(r.approval())).sum();

    let mut approval_distribution: BTreeMap<u8, usize> =
        (APPROVAL_MIN..=APPROVAL_MAX).map(|a| (a, 0)).collect();
    let mut emotion_sums: BTreeMap<Emotion, (f64, usize)> = BTreeMap::new();
    let mut intent_counts: BTreeMap<Intent, usize> = BTreeMap::new();

    for r in &sorted {
        *approval_distribution.entry(r.approval()).or_default() += 1;
        *intent_counts.entry(r.intent()).or_default() += 1;
        for (emotion, score) in r.emotions().iter() {
            let slot = emotion_sums.entry(emotion).or_insert((0.0, 0));
            slot.0 += score;
            slot.1 += 1;
        }
    }

    let emotion_means = emotion_sums
        .into_iter()
        .map(|(e, (sum, count))| (e, round_to(sum / count as f64, 3)))
        .collect();

    sorted.sort_by(|a, b| b.approval().cmp(&a.approval()));
    let quote = |r: &ValidatedAgentResponse| Quote {
        approval: r.approval(),
        verbatim: r.verbatim().to_owned(),
    };

    Some(PhaseAggregate {
        response_count: n,
        avg_approval: round_to(f64::from(approval_total) / n as f64, 2),
        approval_distribution,
        emotion_means,
        intent_counts,
        representative_quotes: RepresentativeQuotes {
            most_positive: quote(sorted[0]),
            most_negative: quote(sorted[n - 1]),
        },
    })
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
