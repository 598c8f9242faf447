//! The text-generation capability the client drives.

use std::sync::Arc;

use thiserror::Error;

/// A failed backend call.  Only the message is inspected, once, to decide
/// between rate limiting and other transport failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// "Given a prompt, return text."
///
/// Implementations must be `Send + Sync`: with the `parallel` feature of
/// `sw-sim` one backend serves many agents at once.
pub trait TextBackend: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, BackendError>;

    /// Short label for log lines.
    fn name(&self) -> &str {
        "backend"
    }
}

impl<T: TextBackend + ?Sized> TextBackend for &T {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        (**self).complete(prompt)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: TextBackend + ?Sized> TextBackend for Box<T> {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        (**self).complete(prompt)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: TextBackend + ?Sized> TextBackend for Arc<T> {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        (**self).complete(prompt)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
