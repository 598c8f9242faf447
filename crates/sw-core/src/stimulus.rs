//! The message under test.

/// One stimulus, identical for every agent and phase of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stimulus {
    /// Where the message appears (`"social media"`, `"sms"`, …).
    pub channel:      String,
    /// Free-form scenario tag, also quoted in agent memory lines.
    pub scenario_tag: String,
    pub sender:       String,
    pub context:      String,
    pub message:      String,
}
