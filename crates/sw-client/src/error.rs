//! Generation failures.

use thiserror::Error;

/// How a backend error was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RateLimit,
    Transport,
}

impl FailureKind {
    /// Classify a backend error message.  Called exactly once per failure.
    pub fn classify(message: &str) -> Self {
        const MARKERS: [&str; 7] = [
            "quota",
            "rate limit",
            "rate-limit",
            "ratelimit",
            "too many requests",
            "resource_exhausted",
            "429",
        ];
        let lower = message.to_lowercase();
        if MARKERS.iter().any(|m| lower.contains(m)) {
            FailureKind::RateLimit
        } else {
            FailureKind::Transport
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// Output never satisfied the response contract.
    #[error("invalid model output after {attempts} attempt(s): {reason}")]
    Validation { attempts: u32, reason: String },

    /// The backend signalled quota exhaustion or throttling.
    #[error("rate limited after {attempts} attempt(s): {message}")]
    RateLimit { attempts: u32, message: String },

    /// Any other backend or call failure.
    #[error("backend call failed after {attempts} attempt(s): {message}")]
    Transport { attempts: u32, message: String },

    /// Missing credential or unusable setting.  Raised at construction and
    /// never retried.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenError {
    pub(crate) fn backend(kind: FailureKind, attempts: u32, message: String) -> Self {
        match kind {
            FailureKind::RateLimit => GenError::RateLimit { attempts, message },
            FailureKind::Transport => GenError::Transport { attempts, message },
        }
    }

    /// Attempts made before giving up (0 for configuration errors).
    pub fn attempts(&self) -> u32 {
        match self {
            GenError::Validation { attempts, .. }
            | GenError::RateLimit { attempts, .. }
            | GenError::Transport { attempts, .. } => *attempts,
            GenError::Config(_) => 0,
        }
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self, GenError::RateLimit { .. })
    }
}

pub type GenResult<T> = Result<T, GenError>;
