//! One phase over every agent.

use std::time::Instant;

use sw_client::{GenResult, Generation, GenerationClient, TextBackend};
use sw_contract::ValidatedAgentResponse;
use sw_core::{Agent, AgentId, Phase, RunId, Stimulus};
use sw_prompt::{PhaseContext, PriorReaction};
use tracing::{debug, warn};

use crate::{AgentFailure, AgentResponseRecord, PhaseAggregate, RunObserver, aggregate};

// ── Per-agent generation result ───────────────────────────────────────────────

/// Output of the (potentially parallel) generation step for one agent.
struct Timed {
    result:        GenResult<Generation>,
    processing_ms: u64,
}

/// Everything one phase produced.
#[derive(Debug, Default)]
pub struct PhaseOutcome {
    /// Successful responses, ascending agent order.
    pub records:   Vec<AgentResponseRecord>,
    pub failures:  Vec<AgentFailure>,
    /// `None` when `records` is empty.
    pub aggregate: Option<PhaseAggregate>,
}

// ── PhaseExecutor ─────────────────────────────────────────────────────────────

/// Runs one phase: render prompts, generate, then apply results.
///
/// 1. **Prompts** (sequential): one per agent from a shared [`PhaseContext`].
/// 2. **Generate** (optionally parallel with the `parallel` feature): one
///    [`GenerationClient::generate_detailed`] call per agent.  Retry waits
///    stay local to that agent's call.
/// 3. **Apply** (sequential, input order): append the memory line and emit
///    a record, or emit an [`AgentFailure`].  A failure never stops the phase.
/// 4. **Aggregate** the successful responses, if any.
pub struct PhaseExecutor<'a, B: TextBackend> {
    client:    &'a GenerationClient<B>,
    run:       RunId,
    store_raw: bool,
}

impl<'a, B: TextBackend> PhaseExecutor<'a, B> {
    pub fn new(client: &'a GenerationClient<B>, run: RunId, store_raw: bool) -> Self {
        Self { client, run, store_raw }
    }

    /// Execute `phase` for `agents`.
    ///
    /// `d1` is the settled set of D1 records the later-phase prompts draw on;
    /// it is ignored for D1 itself.  Agents should be in ascending id order.
    pub fn execute_phase<O: RunObserver>(
        &self,
        phase:    Phase,
        agents:   &mut [Agent],
        stimulus: &Stimulus,
        d1:       &[&AgentResponseRecord],
        observer: &mut O,
    ) -> PhaseOutcome {
        let ctx = if phase.is_initial() {
            PhaseContext::initial(stimulus)
        } else {
            let prior: Vec<(AgentId, PriorReaction)> = d1
                .iter()
                .map(|r| (r.agent, PriorReaction::from(&r.response)))
                .collect();
            PhaseContext::followup(phase, stimulus, prior)
        };

        // ── Prompts (sequential) ──────────────────────────────────────────
        let prompts: Vec<String> = agents.iter().map(|a| ctx.render(a)).collect();

        // ── Generate ──────────────────────────────────────────────────────
        let generated = self.generate_all(&prompts);

        // ── Apply (sequential, input order) ───────────────────────────────
        let mut outcome = PhaseOutcome::default();
        for ((agent, prompt), timed) in agents.iter_mut().zip(&prompts).zip(generated) {
            match timed.result {
                Ok(generation) => {
                    let response = generation.response;
                    agent.memory.append(&memory_line(phase, &stimulus.scenario_tag, &response));
                    debug!(
                        run = %self.run,
                        phase = %phase,
                        agent = %agent.id,
                        attempts = generation.attempts,
                        prompt_chars = prompt.chars().count(),
                        approval = response.approval(),
                        "agent response accepted"
                    );
                    let record = AgentResponseRecord {
                        run:           self.run,
                        agent:         agent.id,
                        phase,
                        response,
                        attempts:      generation.attempts,
                        processing_ms: timed.processing_ms,
                        raw:           self.store_raw.then_some(generation.raw),
                    };
                    observer.on_response(&record);
                    outcome.records.push(record);
                }
                Err(error) => {
                    let failure = AgentFailure {
                        agent:      agent.id,
                        agent_name: agent.display_name.clone(),
                        phase,
                        error,
                    };
                    warn!(run = %self.run, phase = %phase, agent = %agent.id, "{failure}");
                    observer.on_agent_failure(&failure);
                    outcome.failures.push(failure);
                }
            }
        }

        outcome.aggregate = aggregate(outcome.records.iter().map(|r| &r.response));
        outcome
    }

    fn generate_one(&self, prompt: &str) -> Timed {
        let started = Instant::now();
        let result = self.client.generate_detailed(prompt);
        let processing_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        Timed { result, processing_ms }
    }

    fn generate_all(&self, prompts: &[String]) -> Vec<Timed> {
        #[cfg(not(feature = "parallel"))]
        {
            prompts.iter().map(|p| self.generate_one(p)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps input order.
            prompts.par_iter().map(|p| self.generate_one(p)).collect()
        }
    }
}

/// `[D7] Saw message about <scenario>. Reaction: <intent> (approval: <n>/10)`
pub fn memory_line(phase: Phase, scenario: &str, response: &ValidatedAgentResponse) -> String {
    format!(
        "[{phase}] Saw message about {scenario}. Reaction: {} (approval: {}/10)",
        response.intent(),
        response.approval(),
    )
}
