//! The retrying, validating generation client.

use std::time::Duration;

use serde_json::Value;
use sw_contract::{ValidatedAgentResponse, validate};
use tracing::{debug, warn};

use crate::extract::extract_json;
use crate::{FailureKind, GenError, GenResult, Sleeper, TextBackend, ThreadSleeper};

// ── RetryPolicy ───────────────────────────────────────────────────────────────

/// How many times to retry and how long to wait in between.
///
/// A call makes at most `max_retries + 1` attempts.  Validation retries wait
/// `retry_delay`; backend-error retries wait `retry_delay × attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_retries: u32,
    #[serde(with = "millis")]
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 2, retry_delay: Duration::from_secs(1) }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self { max_retries, retry_delay }
    }

    #[inline]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// A successful call: the validated response plus what it took to get it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub response: ValidatedAgentResponse,
    /// The parsed payload exactly as the backend produced it.
    pub raw:      Value,
    /// Attempts used, including the successful one.
    pub attempts: u32,
}

/// Result of a single attempt, before retry eligibility is decided.
enum Attempt {
    Valid { response: ValidatedAgentResponse, raw: Value },
    Invalid(String),
    Failed(FailureKind, String),
}

// ── GenerationClient ──────────────────────────────────────────────────────────

/// Wraps a [`TextBackend`] with JSON recovery, contract validation,
/// corrective re-prompting and backoff.
///
/// Holds no state between calls; one client can serve every agent of a run.
pub struct GenerationClient<B: TextBackend> {
    backend: B,
    policy:  RetryPolicy,
    sleeper: Box<dyn Sleeper>,
}

impl<B: TextBackend> GenerationClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            policy:  RetryPolicy::default(),
            sleeper: Box::new(ThreadSleeper),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the thread sleeper (tests record waits instead of blocking).
    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate one validated response for `prompt`.
    pub fn generate(&self, prompt: &str) -> GenResult<ValidatedAgentResponse> {
        self.generate_detailed(prompt).map(|g| g.response)
    }

    /// Like [`generate`][Self::generate], keeping the raw payload and the
    /// attempt count.
    ///
    /// The prompt grows across validation retries (each failure appends its
    /// own corrective note) and is resent unchanged after backend errors.
    pub fn generate_detailed(&self, prompt: &str) -> GenResult<Generation> {
        let max_attempts = self.policy.max_attempts();
        let mut prompt = prompt.to_owned();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let retries_left = attempt < max_attempts;

            match self.attempt(&prompt) {
                Attempt::Valid { response, raw } => {
                    debug!(attempt, backend = self.backend.name(), "generation validated");
                    return Ok(Generation { response, raw, attempts: attempt });
                }

                Attempt::Invalid(reason) => {
                    if !retries_left {
                        return Err(GenError::Validation { attempts: attempt, reason });
                    }
                    warn!(attempt, %reason, "model output invalid, retrying with correction");
                    prompt.push_str(&corrective_note(&reason));
                    self.sleeper.sleep(self.policy.retry_delay);
                }

                Attempt::Failed(kind, message) => {
                    if !retries_left {
                        return Err(GenError::backend(kind, attempt, message));
                    }
                    warn!(attempt, ?kind, %message, "backend call failed, backing off");
                    self.sleeper.sleep(self.policy.retry_delay * attempt);
                }
            }
        }
    }

    /// Send a trivial prompt and report whether the backend answered `OK`.
    pub fn test_connection(&self) -> bool {
        match self.backend.complete(r#"Say 'OK' in JSON format: {"status": "OK"}"#) {
            Ok(text) => text.contains("OK"),
            Err(e) => {
                warn!(error = %e, backend = self.backend.name(), "connection test failed");
                false
            }
        }
    }

    fn attempt(&self, prompt: &str) -> Attempt {
        let text = match self.backend.complete(prompt) {
            Ok(text) => text,
            Err(e) => return Attempt::Failed(FailureKind::classify(&e.message), e.message),
        };

        let raw = match extract_json(&text) {
            Ok(raw) => raw,
            Err(reason) => return Attempt::Invalid(reason),
        };

        match validate(&raw) {
            Ok(response) => Attempt::Valid { response, raw },
            Err(e) => Attempt::Invalid(format!("schema validation failed: {e}")),
        }
    }
}

/// Text appended to the prompt after an invalid response.
pub fn corrective_note(reason: &str) -> String {
    format!(
        "\n\nPREVIOUS RESPONSE WAS INVALID: {reason}\n\
         Please respond with ONLY valid JSON matching the exact schema."
    )
}
