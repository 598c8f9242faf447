//! `sw-prompt` — pure prompt rendering.
//!
//! Every function here is deterministic: identical inputs give byte-identical
//! prompts.  There is no randomness and no hidden state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`prior`]   | `PriorReaction` — an agent's D1 reaction as seen by later phases |
//! | [`summary`] | `build_social_summary` — digest of every agent's D1 reaction  |
//! | [`render`]  | D1 and later-phase renderers, attitude formatting             |
//! | [`context`] | `PhaseContext<'a>` — per-phase inputs shared by all agents    |
//!
//! # Two renderers
//!
//! - **D1** embeds demographics, personality, attitudes, style, the stimulus
//!   and the response-contract instructions.
//! - **Later phases** add the agent's own D1 reaction, its memory log and the
//!   social summary.  An agent without a D1 reaction gets
//!   [`PriorReaction::neutral`].

pub mod context;
pub mod prior;
pub mod render;
pub mod summary;

#[cfg(test)]
mod tests;

pub use context::PhaseContext;
pub use prior::PriorReaction;
pub use render::{
    build_followup_prompt, build_initial_prompt, format_attitudes, preview, sentiment_label,
};
pub use summary::build_social_summary;
