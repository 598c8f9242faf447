//! Read-only inputs shared by every agent of one phase.

use std::collections::HashMap;

use sw_core::{Agent, AgentId, Phase, Stimulus};

use crate::{PriorReaction, build_followup_prompt, build_initial_prompt, build_social_summary};

/// Everything a phase needs to render any agent's prompt.
///
/// Built once per phase from a settled snapshot of D1 reactions, then shared
/// immutably (and across threads) while prompts are rendered.
pub struct PhaseContext<'a> {
    pub phase:          Phase,
    pub stimulus:       &'a Stimulus,
    /// Empty for D1.
    pub social_summary: String,
    prior:              HashMap<AgentId, PriorReaction>,
}

impl<'a> PhaseContext<'a> {
    /// Context for the initial phase.  No prior reactions, no summary.
    pub fn initial(stimulus: &'a Stimulus) -> Self {
        Self {
            phase: Phase::INITIAL,
            stimulus,
            social_summary: String::new(),
            prior: HashMap::new(),
        }
    }

    /// Context for a later phase.
    ///
    /// `d1` must be ordered by agent id; the social summary quotes the first
    /// qualifying reactions in that order.
    pub fn followup(phase: Phase, stimulus: &'a Stimulus, d1: Vec<(AgentId, PriorReaction)>) -> Self {
        let reactions: Vec<PriorReaction> = d1.iter().map(|(_, r)| r.clone()).collect();
        Self {
            phase,
            stimulus,
            social_summary: build_social_summary(&reactions),
            prior: d1.into_iter().collect(),
        }
    }

    /// The agent's D1 reaction, or the neutral placeholder.
    pub fn prior_for(&self, id: AgentId) -> PriorReaction {
        self.prior.get(&id).cloned().unwrap_or_else(PriorReaction::neutral)
    }

    /// Render `agent`'s prompt for this phase.
    pub fn render(&self, agent: &Agent) -> String {
        if self.phase.is_initial() {
            build_initial_prompt(&agent.traits, self.stimulus)
        } else {
            build_followup_prompt(
                self.phase,
                &agent.traits,
                self.stimulus,
                &self.prior_for(agent.id),
                &self.social_summary,
                &agent.memory,
            )
        }
    }
}
