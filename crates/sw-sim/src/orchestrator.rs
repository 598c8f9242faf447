//! Top-level run controller and its builder.

use std::collections::HashSet;

use sw_client::{GenerationClient, TextBackend};
use sw_core::{Agent, Phase, RunId, Stimulus, Timestamp};
use tracing::{info, warn};

use crate::config::check_phases;
use crate::{
    PhaseExecutor, RunConfig, RunObserver, RunResults, RunState, RunStatus, SimError, SimResult,
};

// ── RunBuilder ────────────────────────────────────────────────────────────────

/// Fluent builder for [`RunOrchestrator<B>`].
///
/// # Required inputs
///
/// - [`RunId`] — assigned by the caller
/// - [`Stimulus`] — the message under test
/// - `Vec<Agent>` — the audience; may be empty (the run then fails)
/// - [`GenerationClient<B>`] — wraps the text backend
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                        |
/// |----------------|--------------------------------|
/// | `.config(c)`   | `RunConfig::default()`         |
/// | `.phases(v)`   | `config.default_phases`        |
pub struct RunBuilder<B: TextBackend> {
    run:      RunId,
    stimulus: Stimulus,
    agents:   Vec<Agent>,
    client:   GenerationClient<B>,
    config:   RunConfig,
    phases:   Option<Vec<Phase>>,
}

impl<B: TextBackend> RunBuilder<B> {
    pub fn new(run: RunId, stimulus: Stimulus, agents: Vec<Agent>, client: GenerationClient<B>) -> Self {
        Self {
            run,
            stimulus,
            agents,
            client,
            config: RunConfig::default(),
            phases: None,
        }
    }

    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Phases for this run, overriding `config.default_phases`.
    ///
    /// Checked when the run starts; an empty or repeated list fails the run.
    pub fn phases(mut self, phases: Vec<Phase>) -> Self {
        self.phases = Some(phases);
        self
    }

    /// Return a `pending` orchestrator.  Agents are put in ascending id order.
    pub fn build(mut self) -> RunOrchestrator<B> {
        self.agents.sort_by_key(|a| a.id);
        RunOrchestrator {
            state:    RunState::new(self.run),
            results:  RunResults::new(),
            stimulus: self.stimulus,
            agents:   self.agents,
            client:   self.client,
            config:   self.config,
            phases:   self.phases,
        }
    }
}

// ── RunOrchestrator ───────────────────────────────────────────────────────────

/// Drives one run from `pending` to a terminal status.
///
/// Phases run strictly in order.  Every phase after D1 reads the D1
/// responses, never those of the phase immediately before it.
///
/// Create via [`RunBuilder`].
pub struct RunOrchestrator<B: TextBackend> {
    state:    RunState,
    results:  RunResults,
    stimulus: Stimulus,
    /// Ascending id order.  Memory logs grow as phases complete.
    agents:   Vec<Agent>,
    client:   GenerationClient<B>,
    config:   RunConfig,
    phases:   Option<Vec<Phase>>,
}

impl<B: TextBackend> RunOrchestrator<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Execute the run and return its terminal status.
    ///
    /// Per-agent failures never abort the run; they make it `partial`.
    /// Setup failures (bad configuration, no agents, too many agents) mark the
    /// run `failed`, report it to the observer, then return the error.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<RunStatus> {
        self.state.start(Timestamp::now())?;
        info!(run = %self.state.run, agents = self.agents.len(), "run started");
        observer.on_run_start(&self.state);

        match self.run_phases(observer) {
            Ok(()) => {
                let status = self.state.finish(Timestamp::now())?;
                info!(
                    run = %self.state.run,
                    %status,
                    errors = self.state.error_count(),
                    responses = self.results.response_count(),
                    "run finished"
                );
                observer.on_run_end(&self.state);
                Ok(status)
            }
            Err(e) => {
                warn!(run = %self.state.run, error = %e, "run failed");
                self.state.fail(e.to_string(), Timestamp::now())?;
                observer.on_run_end(&self.state);
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn results(&self) -> &RunResults {
        &self.results
    }

    /// Agents with their memory logs as of the last completed phase.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Consume the orchestrator, keeping the run's outputs.
    pub fn into_parts(self) -> (RunState, RunResults, Vec<Agent>) {
        (self.state, self.results, self.agents)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn run_phases<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.config.validate()?;
        let phases = self.resolve_phases()?;
        self.check_agents()?;
        self.state.set_phases(phases.clone());

        // Explicit field borrows so the borrow checker sees disjoint access.
        let run      = self.state.run;
        let executor = PhaseExecutor::new(&self.client, run, self.config.store_raw_output);
        let agents   = &mut self.agents;
        let results  = &mut self.results;
        let state    = &mut self.state;
        let stimulus = &self.stimulus;

        for phase in phases {
            info!(run = %run, %phase, agents = agents.len(), "phase started");
            observer.on_phase_start(phase, agents.len());

            let outcome = {
                let d1 = results.responses_for(Phase::D1);
                executor.execute_phase(phase, agents, stimulus, &d1, observer)
            };

            for failure in &outcome.failures {
                state.record_error(failure.to_string());
            }
            let (succeeded, failed) = (outcome.records.len(), outcome.failures.len());
            for record in outcome.records {
                results.insert(record)?;
            }
            if let Some(aggregate) = outcome.aggregate {
                results.set_aggregate(phase, aggregate);
            }

            info!(run = %run, %phase, succeeded, failed, "phase finished");
            observer.on_phase_end(phase, results.aggregate(phase));
        }
        Ok(())
    }

    /// Explicit list if given, else the configured default.
    fn resolve_phases(&self) -> SimResult<Vec<Phase>> {
        let phases = self.phases.clone().unwrap_or_else(|| self.config.default_phases.clone());
        check_phases(&phases)?;
        Ok(phases)
    }

    fn check_agents(&self) -> SimResult<()> {
        if self.agents.is_empty() {
            return Err(SimError::Precondition("no agents in the audience".into()));
        }
        if let Some(max) = self.config.max_agents {
            if self.agents.len() > max {
                return Err(SimError::Precondition(format!(
                    "{} agents exceeds the configured maximum of {max}",
                    self.agents.len(),
                )));
            }
        }
        let mut seen = HashSet::with_capacity(self.agents.len());
        for agent in &self.agents {
            if !seen.insert(agent.id) {
                return Err(SimError::Precondition(format!("{} appears more than once", agent.id)));
            }
        }
        Ok(())
    }
}
