//! Run-level configuration.

use serde::{Deserialize, Serialize};
use sw_core::Phase;

use crate::{SimError, SimResult};

/// Settings shared by every run an orchestrator executes.
///
/// | Field              | Default       |
/// |--------------------|---------------|
/// | `default_phases`   | `[D1, D7]`    |
/// | `store_raw_output` | `false`       |
/// | `max_agents`       | no ceiling    |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Phases used when a run does not name its own.
    pub default_phases:   Vec<Phase>,
    /// Keep the backend's parsed JSON on each response record.
    pub store_raw_output: bool,
    /// Runs with more agents than this fail before any phase executes.
    pub max_agents:       Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            default_phases:   vec![Phase::D1, Phase::D7],
            store_raw_output: false,
            max_agents:       None,
        }
    }
}

impl RunConfig {
    /// Reject an empty or repeated default phase list.
    pub fn validate(&self) -> SimResult<()> {
        check_phases(&self.default_phases)?;
        if self.max_agents == Some(0) {
            return Err(SimError::Config("max_agents must be at least 1".into()));
        }
        Ok(())
    }
}

/// A phase list must be non-empty and name each phase at most once.
pub(crate) fn check_phases(phases: &[Phase]) -> SimResult<()> {
    if phases.is_empty() {
        return Err(SimError::Config("phase list is empty".into()));
    }
    for (i, phase) in phases.iter().enumerate() {
        if phases[..i].contains(phase) {
            return Err(SimError::Config(format!("phase {phase} listed more than once")));
        }
    }
    Ok(())
}
