//! Per-agent outcomes of one phase.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use sw_client::GenError;
use sw_contract::ValidatedAgentResponse;
use sw_core::{AgentId, Phase, RunId};

/// A validated response attributed to `(run, agent, phase)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentResponseRecord {
    pub run:           RunId,
    pub agent:         AgentId,
    pub phase:         Phase,
    pub response:      ValidatedAgentResponse,
    /// Backend calls used, including the successful one.
    pub attempts:      u32,
    /// Wall-clock time spent in the generation client.
    pub processing_ms: u64,
    /// Parsed backend output, kept only when `RunConfig::store_raw_output` is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw:           Option<Value>,
}

/// One agent's definitive failure in one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentFailure {
    pub agent:      AgentId,
    pub agent_name: String,
    pub phase:      Phase,
    pub error:      GenError,
}

impl fmt::Display for AgentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent {} phase {}: {}", self.agent_name, self.phase, self.error)
    }
}
