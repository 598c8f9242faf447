//! Per-agent traits supplied by the audience generator.
//!
//! The core only reads these.  Every field has a default so partially filled
//! records (older segments, hand-written fixtures) still render a prompt.

use std::collections::BTreeMap;

use crate::{CoreError, CoreResult};

/// Communication style the agent writes in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleGuide {
    pub formality:   String,
    pub emoji_usage: String,
    pub dialect:     String,
}

impl Default for StyleGuide {
    fn default() -> Self {
        Self {
            formality:   "moderate".to_owned(),
            emoji_usage: "occasional".to_owned(),
            dialect:     "Modern Standard Arabic/English mix".to_owned(),
        }
    }
}

/// Demographics, personality, attitudes and writing style of one agent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentTraits {
    pub age:            u32,
    pub gender:         String,
    pub location:       String,
    pub education:      String,
    pub income_level:   String,

    // Personality scores, each in [0, 1].
    pub openness:       f64,
    pub skepticism:     f64,
    pub traditionalism: f64,
    pub tech_savviness: f64,

    /// Topic → sentiment score in [0, 1].  Sorted by topic so prompts are
    /// byte-identical for identical inputs.
    pub attitudes:      BTreeMap<String, f64>,

    pub style:          StyleGuide,
}

impl Default for AgentTraits {
    fn default() -> Self {
        Self {
            age:            30,
            gender:         "not specified".to_owned(),
            location:       "MENA region".to_owned(),
            education:      "bachelor".to_owned(),
            income_level:   "middle".to_owned(),
            openness:       0.5,
            skepticism:     0.5,
            traditionalism: 0.5,
            tech_savviness: 0.5,
            attitudes:      BTreeMap::new(),
            style:          StyleGuide::default(),
        }
    }
}

impl AgentTraits {
    /// Named personality scores in prompt order.
    pub fn personality(&self) -> [(&'static str, f64); 4] {
        [
            ("openness",       self.openness),
            ("skepticism",     self.skepticism),
            ("traditionalism", self.traditionalism),
            ("tech_savviness", self.tech_savviness),
        ]
    }

    /// Check that every personality score lies in [0, 1].
    ///
    /// Attitude scores are not checked: the prompt renders whatever the
    /// generator produced and labels it by threshold.
    pub fn check(&self) -> CoreResult<()> {
        for (name, value) in self.personality() {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::TraitOutOfRange { name, value: value.to_string() });
            }
        }
        Ok(())
    }
}
