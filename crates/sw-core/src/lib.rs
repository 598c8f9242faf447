//! `sw-core` — foundational records for the swarm audience simulation engine.
//!
//! This crate is a dependency of every other `sw-*` crate.  It has no `sw-*`
//! dependencies and holds only plain data: the collaborators that own
//! storage, HTTP and agent generation hand these records to the core.
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `RunId`                                     |
//! | [`phase`]     | `Phase` (`D1`, `D7`, `D30`, `D90`)                     |
//! | [`time`]      | `Timestamp` (Unix milliseconds)                        |
//! | [`traits`]    | `AgentTraits`, `StyleGuide`                            |
//! | [`stimulus`]  | `Stimulus`                                             |
//! | [`agent`]     | `Agent`, `AgentMemory`                                 |
//! | [`error`]     | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod agent;
pub mod error;
pub mod ids;
pub mod phase;
pub mod stimulus;
pub mod time;
pub mod traits;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, AgentMemory};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, RunId};
pub use phase::Phase;
pub use stimulus::Stimulus;
pub use time::Timestamp;
pub use traits::{AgentTraits, StyleGuide};
