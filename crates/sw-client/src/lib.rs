//! `sw-client` — one validated generation per call.
//!
//! # Attempt loop
//!
//! ```text
//! for attempt in 1..=max_retries + 1:
//!   ① Call      — TextBackend::complete(prompt)
//!   ② Extract   — parse JSON; fall back to a ```json fenced block
//!   ③ Validate  — sw_contract::validate
//!                   valid           → return
//!                   invalid         → append corrective note, wait delay
//!   ④ On backend error: classify once (rate limit / transport),
//!                   wait delay × attempt, retry with the same prompt
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`backend`]  | `TextBackend` capability, `BackendError`                   |
//! | [`client`]   | `GenerationClient`, `RetryPolicy`, `Generation`            |
//! | [`extract`]  | JSON recovery from raw model text                          |
//! | [`sleep`]    | `Sleeper`, `ThreadSleeper`                                 |
//! | [`settings`] | `GenerationConfig` (env-loaded backend settings)           |
//! | `gemini`     | `GeminiBackend` (feature `http`)                           |
//! | [`error`]    | `GenError`, `GenResult`                                    |
//!
//! # Cargo features
//!
//! | Feature | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `http`  | Builds `GeminiBackend` on blocking `reqwest`.                |

pub mod backend;
pub mod client;
pub mod settings;
pub mod error;
pub mod extract;
pub mod sleep;

#[cfg(feature = "http")]
pub mod gemini;


pub use backend::{BackendError, TextBackend};
pub use client::{Generation, GenerationClient, RetryPolicy};
pub use settings::GenerationConfig;
pub use error::{FailureKind, GenError, GenResult};
pub use sleep::{Sleeper, ThreadSleeper};

#[cfg(feature = "http")]
pub use gemini::GeminiBackend;
