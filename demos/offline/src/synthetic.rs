//! A deterministic stand-in for the text-generation service.
//!
//! Output depends only on the seed and the prompt, so reruns are identical.
//! Some replies come wrapped in a markdown fence and a few are malformed, so
//! the client's JSON recovery and corrective retries get exercised offline.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value, json};
use sw_client::{BackendError, TextBackend};
use sw_contract::{Emotion, Intent};

const POSITIVE: &[&str] = &[
    "Double points? I'm in, already planning my next order.",
    "Nice move, this actually makes me want to shop there more.",
    "Finally a loyalty deal that feels generous.",
];
const NEUTRAL: &[&str] = &[
    "Might check it out if I'm passing by.",
    "Not sure yet, need to see the fine print.",
    "Another promotion. We'll see.",
];
const NEGATIVE: &[&str] = &[
    "Feels like a gimmick to collect more data.",
    "Points never add up to anything useful.",
    "Raise quality instead of handing out points.",
];

const POSITIVE_INTENTS: &[Intent] =
    &[Intent::SharePositive, Intent::PurchaseIntent, Intent::EngageSupportive];
const NEUTRAL_INTENTS:  &[Intent] = &[Intent::Ignore, Intent::SeekMoreInfo];
const NEGATIVE_INTENTS: &[Intent] =
    &[Intent::ShareNegative, Intent::EngageCritical, Intent::OpposeActively];

pub struct SyntheticBackend {
    seed: u64,
}

impl SyntheticBackend {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for(&self, prompt: &str) -> SmallRng {
        let mut h = DefaultHasher::new();
        self.seed.hash(&mut h);
        prompt.hash(&mut h);
        SmallRng::seed_from_u64(h.finish())
    }
}

impl TextBackend for SyntheticBackend {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let mut rng = self.rng_for(prompt);

        match rng.gen_range(0..20) {
            0 => return Ok("Sorry, I can't help with that.".to_owned()),
            1 => return Err(BackendError::new("HTTP 503: upstream timeout")),
            _ => {}
        }

        let approval: u8 = rng.gen_range(1..=10);
        let (intents, lines) = match approval {
            8..=10 => (POSITIVE_INTENTS, POSITIVE),
            4..=7  => (NEUTRAL_INTENTS, NEUTRAL),
            _      => (NEGATIVE_INTENTS, NEGATIVE),
        };

        let mut emotions = Map::new();
        for emotion in Emotion::ALL {
            let score = (rng.r#gen::<f64>() * 100.0).round() / 100.0;
            emotions.insert(emotion.as_str().to_owned(), Value::from(score));
        }

        let body = json!({
            "approval":          approval,
            "emotions":          emotions,
            "intent":            intents.choose(&mut rng).copied().unwrap_or(Intent::Ignore),
            "intent_confidence": (rng.gen_range(0.4..1.0_f64) * 100.0).round() / 100.0,
            "verbatim":          lines.choose(&mut rng).copied().unwrap_or_default(),
        })
        .to_string();

        if rng.gen_ratio(1, 5) {
            Ok(format!("Here is the reaction:\n```json\n{body}\n```"))
        } else {
            Ok(body)
        }
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}
