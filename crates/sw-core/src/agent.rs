//! Agent records and their append-only memory log.

use std::fmt;

use crate::{AgentId, AgentTraits};

// ── AgentMemory ───────────────────────────────────────────────────────────────

/// Append-only text log, one line per processed phase.
///
/// Lines are never rewritten or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentMemory(String);

impl AgentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a log persisted by a previous run.
    pub fn from_text(text: impl Into<String>) -> Self {
        AgentMemory(text.into().trim().to_owned())
    }

    /// Append one line.  Embedded newlines are flattened to spaces so the
    /// one-line-per-phase shape holds.
    pub fn append(&mut self, line: &str) {
        let line = line.trim().replace('\n', " ");
        if line.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push('\n');
        }
        self.0.push_str(&line);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    pub fn len(&self) -> usize {
        self.lines().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AgentMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A synthetic audience member as handed to the core.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:           AgentId,
    pub display_name: String,
    pub traits:       AgentTraits,
    /// Owned by the phase executor during a run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub memory:       AgentMemory,
}

impl Agent {
    pub fn new(id: AgentId, display_name: impl Into<String>, traits: AgentTraits) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            traits,
            memory: AgentMemory::new(),
        }
    }
}
