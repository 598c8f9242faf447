//! Responses and aggregates produced by one run.

use std::collections::BTreeMap;

use sw_core::{AgentId, Phase};

use crate::{AgentResponseRecord, PhaseAggregate, SimError, SimResult};

/// Keyed storage for a run's outputs.
///
/// Responses are keyed by `(agent, phase)` and written once.  Aggregates are
/// keyed by phase and overwritten on recomputation.
#[derive(Debug, Clone, Default)]
pub struct RunResults {
    responses:  BTreeMap<(AgentId, Phase), AgentResponseRecord>,
    aggregates: BTreeMap<Phase, PhaseAggregate>,
}

impl RunResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a response.  A second response for the same `(agent, phase)` is
    /// rejected and the first is kept.
    pub fn insert(&mut self, record: AgentResponseRecord) -> SimResult<()> {
        let key = (record.agent, record.phase);
        if self.responses.contains_key(&key) {
            return Err(SimError::DuplicateResponse { agent: record.agent, phase: record.phase });
        }
        self.responses.insert(key, record);
        Ok(())
    }

    /// Replace the aggregate for `phase`.
    pub fn set_aggregate(&mut self, phase: Phase, aggregate: PhaseAggregate) {
        self.aggregates.insert(phase, aggregate);
    }

    /// All responses of `phase`, ascending by agent id.
    pub fn responses_for(&self, phase: Phase) -> Vec<&AgentResponseRecord> {
        self.responses.values().filter(|r| r.phase == phase).collect()
    }

    pub fn response(&self, agent: AgentId, phase: Phase) -> Option<&AgentResponseRecord> {
        self.responses.get(&(agent, phase))
    }

    pub fn aggregate(&self, phase: Phase) -> Option<&PhaseAggregate> {
        self.aggregates.get(&phase)
    }

    /// Every aggregate, in phase order.
    pub fn aggregates(&self) -> impl Iterator<Item = (Phase, &PhaseAggregate)> {
        self.aggregates.iter().map(|(&p, a)| (p, a))
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}
