use sw_client::GenError;
use sw_core::{AgentId, Phase};
use thiserror::Error;

use crate::RunStatus;

#[derive(Debug, Error)]
pub enum SimError {
    /// The run cannot start meaningfully (no agents, too many agents, …).
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("run configuration error: {0}")]
    Config(String),

    #[error("{agent} already has a {phase} response in this run")]
    DuplicateResponse {
        agent: AgentId,
        phase: Phase,
    },

    #[error("invalid run status transition: {from} -> {to}")]
    InvalidTransition {
        from: RunStatus,
        to:   RunStatus,
    },

    #[error(transparent)]
    Generation(#[from] GenError),
}

pub type SimResult<T> = Result<T, SimError>;
