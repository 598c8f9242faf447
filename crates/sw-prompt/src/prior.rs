//! An agent's initial reaction, as carried into later phases.

use sw_contract::{Intent, ValidatedAgentResponse};

/// The three parts of a D1 response that later prompts quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorReaction {
    pub approval: u8,
    pub intent:   Intent,
    pub verbatim: String,
}

impl PriorReaction {
    /// Stand-in for an agent whose D1 generation failed: mid-scale approval,
    /// neutral intent.
    pub fn neutral() -> Self {
        Self {
            approval: 5,
            intent:   Intent::Ignore,
            verbatim: "No initial response".to_owned(),
        }
    }
}

impl From<&ValidatedAgentResponse> for PriorReaction {
    fn from(r: &ValidatedAgentResponse) -> Self {
        Self {
            approval: r.approval(),
            intent:   r.intent(),
            verbatim: r.verbatim().to_owned(),
        }
    }
}
