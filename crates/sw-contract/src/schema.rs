//! Field names, bounds and closed label sets of the response contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::ValidationError;

// ── Field names and bounds ────────────────────────────────────────────────────

pub const FIELD_APPROVAL:          &str = "approval";
pub const FIELD_EMOTIONS:          &str = "emotions";
pub const FIELD_INTENT:            &str = "intent";
pub const FIELD_INTENT_CONFIDENCE: &str = "intent_confidence";
pub const FIELD_VERBATIM:          &str = "verbatim";

pub const APPROVAL_MIN: u8 = 1;
pub const APPROVAL_MAX: u8 = 10;

/// Inclusive bounds shared by every emotion score and `intent_confidence`.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 1.0;

/// Longest accepted verbatim, in chars.  Longer strings fail; they are never
/// truncated.
pub const VERBATIM_MAX_CHARS: usize = 500;

// ── Emotion ───────────────────────────────────────────────────────────────────

/// The eight scored emotions (Plutchik's wheel).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

impl Emotion {
    /// Contract order; also the index into [`Emotions`][crate::Emotions].
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Trust,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Sadness,
        Emotion::Disgust,
        Emotion::Anger,
        Emotion::Anticipation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy          => "joy",
            Emotion::Trust        => "trust",
            Emotion::Fear         => "fear",
            Emotion::Surprise     => "surprise",
            Emotion::Sadness      => "sadness",
            Emotion::Disgust      => "disgust",
            Emotion::Anger        => "anger",
            Emotion::Anticipation => "anticipation",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Intent ────────────────────────────────────────────────────────────────────

/// What the agent says it will do next.  Closed set: synonyms and case
/// variants are not accepted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Will share with positive framing.
    SharePositive,
    /// Will share with criticism.
    ShareNegative,
    /// Will comment supportively.
    EngageSupportive,
    /// Will comment critically.
    EngageCritical,
    /// Will scroll past.
    Ignore,
    /// Will actively push back.
    OpposeActively,
    /// Shows buying interest.
    PurchaseIntent,
    /// Wants to learn more.
    SeekMoreInfo,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::SharePositive,
        Intent::ShareNegative,
        Intent::EngageSupportive,
        Intent::EngageCritical,
        Intent::Ignore,
        Intent::OpposeActively,
        Intent::PurchaseIntent,
        Intent::SeekMoreInfo,
    ];

    /// Wire label, e.g. `"share_positive"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::SharePositive    => "share_positive",
            Intent::ShareNegative    => "share_negative",
            Intent::EngageSupportive => "engage_supportive",
            Intent::EngageCritical   => "engage_critical",
            Intent::Ignore           => "ignore",
            Intent::OpposeActively   => "oppose_actively",
            Intent::PurchaseIntent   => "purchase_intent",
            Intent::SeekMoreInfo     => "seek_more_info",
        }
    }

    /// Third-person phrase used when describing what other people did.
    pub fn observed_phrase(self) -> &'static str {
        match self {
            Intent::SharePositive    => "shared it positively",
            Intent::ShareNegative    => "shared it with criticism",
            Intent::EngageSupportive => "left supportive comments",
            Intent::EngageCritical   => "left critical comments",
            Intent::Ignore           => "scrolled past it",
            Intent::OpposeActively   => "actively opposed it",
            Intent::PurchaseIntent   => "showed interest in buying",
            Intent::SeekMoreInfo     => "looked for more information",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| {
                ValidationError::single(
                    FIELD_INTENT,
                    format!("must be one of {} (got {s:?})", intent_list()),
                )
            })
    }
}

/// `"share_positive", "share_negative", …` in contract order.
pub(crate) fn intent_list() -> String {
    Intent::ALL
        .iter()
        .map(|i| format!("\"{i}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── ResponseSchema ────────────────────────────────────────────────────────────

/// Renders the contract for prompts and for collaborators.
pub struct ResponseSchema;

impl ResponseSchema {
    /// The instruction block appended to every prompt.
    pub fn instructions() -> String {
        let mut out = String::new();
        out.push_str("You must respond with ONLY a valid JSON object with exactly these fields:\n{\n");
        out.push_str(&format!(
            "    \"{FIELD_APPROVAL}\": <integer {APPROVAL_MIN}-{APPROVAL_MAX}, where \
             {APPROVAL_MIN}=strongly disapprove, {APPROVAL_MAX}=strongly approve>,\n"
        ));
        out.push_str(&format!("    \"{FIELD_EMOTIONS}\": {{\n"));
        let last = Emotion::ALL.len() - 1;
        for (i, emotion) in Emotion::ALL.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            out.push_str(&format!(
                "        \"{emotion}\": <float {SCORE_MIN}-{SCORE_MAX}>{sep}\n"
            ));
        }
        out.push_str("    },\n");
        out.push_str(&format!("    \"{FIELD_INTENT}\": <one of: {}>,\n", intent_list()));
        out.push_str(&format!(
            "    \"{FIELD_INTENT_CONFIDENCE}\": <float {SCORE_MIN}-{SCORE_MAX}>,\n"
        ));
        out.push_str(&format!(
            "    \"{FIELD_VERBATIM}\": <string max {VERBATIM_MAX_CHARS} chars - what this \
             person would actually say/post in response>\n"
        ));
        out.push_str("}\n\n");
        out.push_str("Do not include any text before or after the JSON. Only output the JSON object.\n");
        out
    }

    /// Machine-readable description: field names, types, bounds, closed sets.
    pub fn describe() -> Value {
        let emotions: Vec<&str> = Emotion::ALL.iter().map(|e| e.as_str()).collect();
        let intents: Vec<&str> = Intent::ALL.iter().map(|i| i.as_str()).collect();
        json!({
            "type": "object",
            "fields": [
                { "name": FIELD_APPROVAL, "type": "integer",
                  "min": APPROVAL_MIN, "max": APPROVAL_MAX },
                { "name": FIELD_EMOTIONS, "type": "object", "required_keys": emotions,
                  "value_type": "number", "min": SCORE_MIN, "max": SCORE_MAX },
                { "name": FIELD_INTENT, "type": "string", "one_of": intents },
                { "name": FIELD_INTENT_CONFIDENCE, "type": "number",
                  "min": SCORE_MIN, "max": SCORE_MAX },
                { "name": FIELD_VERBATIM, "type": "string", "max_chars": VERBATIM_MAX_CHARS },
            ],
        })
    }
}
