//! The "social summary": what an agent would have seen others say after D1.

use std::collections::BTreeMap;
use std::fmt::Write;

use sw_contract::Intent;

use crate::{PriorReaction, preview};

/// Chars of each quoted comment.
pub const SAMPLE_PREVIEW_CHARS: usize = 100;

/// Quoted comments per side.
pub const SAMPLES_PER_SIDE: usize = 2;

/// Approval at or above which a comment counts as supportive.
pub const SUPPORTIVE_MIN: u8 = 7;

/// Approval at or below which a comment counts as critical.
pub const CRITICAL_MAX: u8 = 4;

pub const NO_DISCUSSION: &str = "Limited public discussion was observed.";

/// Digest of every agent's D1 reaction.
///
/// Quotes are the first matching reactions in input order, so callers should
/// pass reactions in a stable order (ascending agent id).
pub fn build_social_summary(reactions: &[PriorReaction]) -> String {
    if reactions.is_empty() {
        return NO_DISCUSSION.to_owned();
    }

    let total: u32 = reactions.iter().map(|r| u32::from(r.approval)).sum();
    let avg = f64::from(total) / reactions.len() as f64;

    let mut intents: BTreeMap<Intent, usize> = BTreeMap::new();
    for r in reactions {
        *intents.entry(r.intent).or_default() += 1;
    }

    let supportive = samples(reactions, |a| a >= SUPPORTIVE_MIN);
    let critical   = samples(reactions, |a| a <= CRITICAL_MAX);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Overall public reaction: {} (average approval: {avg:.1}/10, {} people reacted)",
        overall_label(avg),
        reactions.len(),
    );
    out.push_str("\nCommon reactions observed:\n");
    for intent in Intent::ALL {
        let n = intents.get(&intent).copied().unwrap_or(0);
        let _ = writeln!(out, "- {n} people {}", intent.observed_phrase());
    }

    out.push_str("\nSample supportive comments seen online:\n");
    push_samples(&mut out, &supportive, "few supportive comments");
    out.push_str("\nSample critical comments seen online:\n");
    push_samples(&mut out, &critical, "few critical comments");
    out
}

/// `Positive` for average ≥ 6, `Mixed` for ≥ 4, else `Negative`.
pub fn overall_label(avg_approval: f64) -> &'static str {
    if avg_approval >= 6.0 {
        "Positive"
    } else if avg_approval >= 4.0 {
        "Mixed"
    } else {
        "Negative"
    }
}

fn samples(reactions: &[PriorReaction], keep: impl Fn(u8) -> bool) -> Vec<String> {
    reactions
        .iter()
        .filter(|r| keep(r.approval))
        .take(SAMPLES_PER_SIDE)
        .map(|r| preview(&r.verbatim, SAMPLE_PREVIEW_CHARS))
        .collect()
}

fn push_samples(out: &mut String, samples: &[String], none: &str) {
    if samples.is_empty() {
        let _ = writeln!(out, "- ({none})");
    }
    for s in samples {
        let _ = writeln!(out, "- \"{s}\"");
    }
}
