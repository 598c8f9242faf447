//! `sw-contract` — the agent response contract.
//!
//! Every generated reaction must be a JSON object with exactly these fields:
//!
//! | Field               | Type    | Bound                                   |
//! |---------------------|---------|-----------------------------------------|
//! | `approval`          | integer | 1 ..= 10                                |
//! | `emotions`          | object  | the 8 [`Emotion`] keys, each in [0, 1]  |
//! | `intent`            | string  | one of the 8 [`Intent`] labels          |
//! | `intent_confidence` | number  | [0, 1]                                  |
//! | `verbatim`          | string  | at most 500 chars                       |
//!
//! The bounds live once, in [`schema`].  Both the prompt instruction block
//! ([`ResponseSchema::instructions`]) and the validator ([`validate()`]) read
//! them from there.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`schema`]   | `Emotion`, `Intent`, field names, bounds, `ResponseSchema`|
//! | [`response`] | `Emotions`, `ValidatedAgentResponse`                      |
//! | [`validate`] | `validate()`                                              |
//! | [`error`]    | `ValidationError`, `FieldIssue`                           |

pub mod error;
pub mod response;
pub mod schema;
pub mod validate;

#[cfg(test)]
mod tests;

pub use error::{FieldIssue, ValidationError, ValidationResult};
pub use response::{Emotions, ValidatedAgentResponse};
pub use schema::{Emotion, Intent, ResponseSchema};
pub use validate::validate;
