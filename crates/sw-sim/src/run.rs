//! Run status state machine.
//!
//! ```text
//! pending ──start──▶ running ──finish──▶ completed | partial
//!                       └──────fail────▶ failed
//! ```
//!
//! Terminal states are sinks; every other transition is a
//! [`SimError::InvalidTransition`].

use std::fmt;

use serde::Serialize;
use sw_core::{Phase, RunId, Timestamp};

use crate::{SimError, SimResult};

/// Most recent errors quoted in [`RunState::error_summary`].
pub const ERROR_SUMMARY_LIMIT: usize = 10;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Running,
    Completed,
    Partial,
    Failed,
}

impl RunStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Pending   => "pending",
            RunStatus::Running   => "running",
            RunStatus::Completed => "completed",
            RunStatus::Partial   => "partial",
            RunStatus::Failed    => "failed",
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Partial | RunStatus::Failed)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status, phase list, accumulated errors and timestamps of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunState {
    pub run:           RunId,
    status:            RunStatus,
    phases:            Vec<Phase>,
    errors:            Vec<String>,
    started_at:        Option<Timestamp>,
    finished_at:       Option<Timestamp>,
    error_summary:     Option<String>,
}

impl RunState {
    pub fn new(run: RunId) -> Self {
        Self {
            run,
            status:        RunStatus::Pending,
            phases:        Vec::new(),
            errors:        Vec::new(),
            started_at:    None,
            finished_at:   None,
            error_summary: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Every error recorded so far, oldest first.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Total number of errors, not only those in the summary.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The last [`ERROR_SUMMARY_LIMIT`] errors joined by newlines.  Set only
    /// for `partial` and `failed` runs.
    pub fn error_summary(&self) -> Option<&str> {
        self.error_summary.as_deref()
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<Timestamp> {
        self.finished_at
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `pending → running`.
    pub fn start(&mut self, now: Timestamp) -> SimResult<()> {
        self.transition(RunStatus::Pending, RunStatus::Running)?;
        self.started_at = Some(now);
        Ok(())
    }

    /// Record the resolved phase list.  Only meaningful while running.
    pub(crate) fn set_phases(&mut self, phases: Vec<Phase>) {
        self.phases = phases;
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// `running → completed` with no errors, `running → partial` otherwise.
    pub fn finish(&mut self, now: Timestamp) -> SimResult<RunStatus> {
        let to = if self.errors.is_empty() { RunStatus::Completed } else { RunStatus::Partial };
        self.transition(RunStatus::Running, to)?;
        self.close(now);
        Ok(to)
    }

    /// `running → failed`, recording `message` as the final error.
    pub fn fail(&mut self, message: impl Into<String>, now: Timestamp) -> SimResult<()> {
        self.transition(RunStatus::Running, RunStatus::Failed)?;
        self.errors.push(message.into());
        self.close(now);
        Ok(())
    }

    fn transition(&mut self, from: RunStatus, to: RunStatus) -> SimResult<()> {
        if self.status != from {
            return Err(SimError::InvalidTransition { from: self.status, to });
        }
        self.status = to;
        Ok(())
    }

    fn close(&mut self, now: Timestamp) {
        self.finished_at = Some(now);
        if !self.errors.is_empty() {
            let skip = self.errors.len().saturating_sub(ERROR_SUMMARY_LIMIT);
            self.error_summary = Some(self.errors[skip..].join("\n"));
        }
    }
}
