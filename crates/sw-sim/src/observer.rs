//! Run observer trait for progress reporting and persistence.

use sw_core::Phase;

use crate::{AgentFailure, AgentResponseRecord, PhaseAggregate, RunState};

/// Callbacks invoked by [`RunOrchestrator::run`][crate::RunOrchestrator::run]
/// at key points of a run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Per-agent callbacks arrive in ascending
/// agent order, on the calling thread, even with the `parallel` feature.
///
/// # Example — persisting responses
///
/// ```rust,ignore
/// struct Persist<'a> { db: &'a mut Db }
///
/// impl RunObserver for Persist<'_> {
///     fn on_response(&mut self, record: &AgentResponseRecord) {
///         self.db.save_response(record);
///     }
///     fn on_run_end(&mut self, state: &RunState) {
///         self.db.save_run(state);
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once the run has entered `running`.
    fn on_run_start(&mut self, _state: &RunState) {}

    fn on_phase_start(&mut self, _phase: Phase, _agents: usize) {}

    /// Called for each validated response, after the agent's memory is updated.
    fn on_response(&mut self, _record: &AgentResponseRecord) {}

    fn on_agent_failure(&mut self, _failure: &AgentFailure) {}

    /// `aggregate` is `None` when no agent succeeded in this phase.
    fn on_phase_end(&mut self, _phase: Phase, _aggregate: Option<&PhaseAggregate>) {}

    /// Called exactly once with the terminal state, including when the run
    /// fails and `run` returns an error.
    fn on_run_end(&mut self, _state: &RunState) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
