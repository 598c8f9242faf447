//! The canonical, validated form of one agent reaction.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value, json};

use crate::schema::{
    FIELD_APPROVAL, FIELD_EMOTIONS, FIELD_INTENT, FIELD_INTENT_CONFIDENCE, FIELD_VERBATIM,
};
use crate::{Emotion, Intent};

// ── Emotions ──────────────────────────────────────────────────────────────────

/// Scores for all eight emotions, indexed by [`Emotion::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emotions([f64; 8]);

impl Emotions {
    pub(crate) fn from_scores(scores: [f64; 8]) -> Self {
        Emotions(scores)
    }

    #[inline]
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.0[emotion.index()]
    }

    /// `(emotion, score)` pairs in contract order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(move |&e| (e, self.0[e.index()]))
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(e, v)| (e.as_str().to_owned(), json!(v)))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for Emotions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Emotion::ALL.len()))?;
        for (emotion, score) in self.iter() {
            map.serialize_entry(emotion.as_str(), &score)?;
        }
        map.end()
    }
}

// ── ValidatedAgentResponse ────────────────────────────────────────────────────

/// A reaction that passed [`validate`][crate::validate()].
///
/// Only the validator constructs these, so every instance satisfies the
/// contract.  Fields are read through accessors; the value is immutable.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ValidatedAgentResponse {
    approval:          u8,
    emotions:          Emotions,
    intent:            Intent,
    intent_confidence: f64,
    verbatim:          String,
}

impl ValidatedAgentResponse {
    pub(crate) fn new(
        approval:          u8,
        emotions:          Emotions,
        intent:            Intent,
        intent_confidence: f64,
        verbatim:          String,
    ) -> Self {
        Self { approval, emotions, intent, intent_confidence, verbatim }
    }

    /// Approval score, 1 ..= 10.
    pub fn approval(&self) -> u8 {
        self.approval
    }

    pub fn emotions(&self) -> &Emotions {
        &self.emotions
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn intent_confidence(&self) -> f64 {
        self.intent_confidence
    }

    pub fn verbatim(&self) -> &str {
        &self.verbatim
    }

    /// The canonical JSON object.  Validating it again yields `self`.
    pub fn to_json(&self) -> Value {
        json!({
            FIELD_APPROVAL:          self.approval,
            FIELD_EMOTIONS:          self.emotions.to_json(),
            FIELD_INTENT:            self.intent.as_str(),
            FIELD_INTENT_CONFIDENCE: self.intent_confidence,
            FIELD_VERBATIM:          self.verbatim,
        })
    }
}
