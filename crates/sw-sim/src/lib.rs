//! `sw-sim` — run orchestrator for the swarm audience simulation engine.
//!
//! # Run loop
//!
//! ```text
//! pending ──start──▶ running
//!   resolve phases (explicit list, else RunConfig::default_phases)
//!   check preconditions (agents present, under max_agents, unique ids)
//!   for phase in phases:
//!     ① Context  — PhaseContext from the settled D1 snapshot
//!     ② Prompts  — rendered per agent, ascending AgentId (sequential)
//!     ③ Generate — GenerationClient per agent
//!                  (parallel with the `parallel` feature)
//!     ④ Apply    — per agent, in order:
//!                    Ok  → record response, append memory line
//!                    Err → record "Agent {name} phase {phase}: {error}"
//!     ⑤ Aggregate — only if ≥1 response succeeded
//! running ──▶ completed (0 errors) │ partial (≥1 error) │ failed (setup error)
//! ```
//!
//! # Crate layout
//!
//! | Module           | Contents                                            |
//! |------------------|-----------------------------------------------------|
//! | [`config`]       | `RunConfig`                                         |
//! | [`record`]       | `AgentResponseRecord`, `AgentFailure`               |
//! | [`aggregate`]    | `PhaseAggregate`, `aggregate`                       |
//! | [`results`]      | `RunResults` — responses and aggregates of one run  |
//! | [`run`]          | `RunState`, `RunStatus` — the status state machine  |
//! | [`observer`]     | `RunObserver`, `NoopObserver`                       |
//! | [`executor`]     | `PhaseExecutor`, `PhaseOutcome`                     |
//! | [`orchestrator`] | `RunOrchestrator`, `RunBuilder`                     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs per-agent generation on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sw_client::GenerationClient;
//! use sw_sim::{NoopObserver, RunBuilder};
//!
//! let mut run = RunBuilder::new(RunId(1), stimulus, agents, GenerationClient::new(backend))
//!     .phases(vec![Phase::D1, Phase::D7])
//!     .build();
//! let status = run.run(&mut NoopObserver)?;
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod executor;
pub mod observer;
pub mod orchestrator;
pub mod record;
pub mod results;
pub mod run;


pub use aggregate::{PhaseAggregate, Quote, RepresentativeQuotes, aggregate};
pub use config::RunConfig;
pub use error::{SimError, SimResult};
pub use executor::{PhaseExecutor, PhaseOutcome};
pub use observer::{NoopObserver, RunObserver};
pub use orchestrator::{RunBuilder, RunOrchestrator};
pub use record::{AgentFailure, AgentResponseRecord};
pub use results::RunResults;
pub use run::{ERROR_SUMMARY_LIMIT, RunState, RunStatus};
