//! Simulated time points at which every agent is re-queried.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A named point in simulated time.
///
/// `D1` is the initial reaction.  Every later phase is rendered against the
/// agent's own `D1` response and a digest of everyone's `D1` responses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    D1,
    D7,
    D30,
    D90,
}

impl Phase {
    /// Every phase, in chronological order.
    pub const ALL: [Phase; 4] = [Phase::D1, Phase::D7, Phase::D30, Phase::D90];

    /// The phase whose responses feed later prompts.
    pub const INITIAL: Phase = Phase::D1;

    /// Days since the stimulus was first seen.
    pub fn days(self) -> u32 {
        match self {
            Phase::D1  => 1,
            Phase::D7  => 7,
            Phase::D30 => 30,
            Phase::D90 => 90,
        }
    }

    pub fn is_initial(self) -> bool {
        self == Phase::INITIAL
    }

    /// Short tag used in prompts, memory lines and aggregates (`"D7"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::D1  => "D1",
            Phase::D7  => "D7",
            Phase::D30 => "D30",
            Phase::D90 => "D90",
        }
    }

    /// Human phrase for the time elapsed since the stimulus.
    pub fn elapsed_phrase(self) -> &'static str {
        match self {
            Phase::D1  => "one day",
            Phase::D7  => "one week",
            Phase::D30 => "one month",
            Phase::D90 => "three months",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPhase(s.to_owned()))
    }
}
