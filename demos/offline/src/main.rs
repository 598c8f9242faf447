//! offline — end-to-end run of the swarm audience simulation.
//!
//! Builds a seeded audience of 8 agents, runs D1 → D7 → D30 against a
//! loyalty-programme announcement and prints the run as JSON.  Uses the
//! Gemini backend when `GEMINI_API_KEY` is set, otherwise a deterministic
//! synthetic backend that needs no network.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod audience;
mod synthetic;

use std::time::{Duration, Instant};

use anyhow::Result;
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sw_client::{GeminiBackend, GenerationClient, GenerationConfig, RetryPolicy, TextBackend};
use sw_core::{Phase, RunId, Stimulus};
use sw_sim::{AgentFailure, PhaseAggregate, RunBuilder, RunConfig, RunObserver, RunState};

use audience::build_audience;
use synthetic::SyntheticBackend;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: u32 = 8;
const SEED:        u64 = 42;
const RUN_ID:      u64 = 1;

// ── Progress printer ──────────────────────────────────────────────────────────

struct ProgressPrinter {
    phase_started: Instant,
}

impl RunObserver for ProgressPrinter {
    fn on_phase_start(&mut self, phase: Phase, agents: usize) {
        self.phase_started = Instant::now();
        println!("{phase}: {agents} agents");
    }

    fn on_agent_failure(&mut self, failure: &AgentFailure) {
        println!("  ✗ {failure}");
    }

    fn on_phase_end(&mut self, phase: Phase, aggregate: Option<&PhaseAggregate>) {
        let secs = self.phase_started.elapsed().as_secs_f64();
        match aggregate {
            Some(a) => println!(
                "{phase}: {} responses, avg approval {:.2} ({secs:.2}s)",
                a.response_count, a.avg_approval,
            ),
            None => println!("{phase}: no responses ({secs:.2}s)"),
        }
    }

    fn on_run_end(&mut self, state: &RunState) {
        println!("run {}: {} ({} errors)", state.run, state.status(), state.error_count());
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let generation = GenerationConfig::from_env()?;
    let run_config = RunConfig {
        default_phases: vec![Phase::D1, Phase::D7, Phase::D30],
        ..RunConfig::default()
    };
    run_config.validate()?;

    let report = if generation.has_api_key() {
        println!("=== offline — Gemini backend ({}) ===", generation.model);
        let client = GenerationClient::new(GeminiBackend::new(&generation)?);
        run(client, run_config)?
    } else {
        println!("=== offline — synthetic backend (set GEMINI_API_KEY for Gemini) ===");
        let client = GenerationClient::new(SyntheticBackend::new(SEED))
            .with_policy(RetryPolicy::new(2, Duration::from_millis(50)));
        run(client, run_config)?
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run<B: TextBackend>(client: GenerationClient<B>, config: RunConfig) -> Result<Value> {
    let agents = build_audience(AGENT_COUNT, SEED);
    info!(agents = agents.len(), seed = SEED, backend = client.backend().name(), "audience ready");

    let mut orchestrator = RunBuilder::new(RunId(RUN_ID), stimulus(), agents, client)
        .config(config)
        .build();

    let mut printer = ProgressPrinter { phase_started: Instant::now() };
    orchestrator.run(&mut printer)?;

    let state = orchestrator.state();
    let results = orchestrator.results();
    let phases: Vec<Value> = state
        .phases()
        .iter()
        .map(|&phase| {
            json!({
                "phase":     phase,
                "aggregate": results.aggregate(phase),
                "responses": results.responses_for(phase),
            })
        })
        .collect();
    let memories: Vec<Value> = orchestrator
        .agents()
        .iter()
        .map(|a| json!({ "agent": a.display_name, "memory": a.memory.as_str() }))
        .collect();

    Ok(json!({
        "run":           state.run,
        "status":        state.status(),
        "error_count":   state.error_count(),
        "error_summary": state.error_summary(),
        "phases":        phases,
        "memories":      memories,
    }))
}

fn stimulus() -> Stimulus {
    Stimulus {
        channel:      "social media".into(),
        scenario_tag: "loyalty programme launch".into(),
        sender:       "Souq Market".into(),
        context:      "Posted on the brand's official account during Ramadan.".into(),
        message:      "Introducing Souq Rewards: earn double points on every purchase this month, \
                       redeemable for groceries, fuel and family outings. Join free in the app today."
            .into(),
    }
}
