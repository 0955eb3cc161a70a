//! Error types for the auth boundary.
//!
//! The identity provider is opaque to us, so both errors carry the
//! provider's own text instead of a classification. The app shows
//! [`AuthError`] to the user verbatim and only logs [`SessionQueryError`].

/// A sign-in attempt was rejected or could not be completed.
///
/// The message is whatever the provider said ("invalid-credential",
/// "network error", ...). The login flow displays it once per failed
/// attempt and never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    /// Wraps a provider-supplied, human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The provider's message, unmodified.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The current-session query failed (provider unreachable, storage
/// corrupted, etc.).
///
/// Callers treat this as "nobody is signed in"; a failed query must
/// never route the user to an authenticated screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session query failed: {0}")]
pub struct SessionQueryError(pub String);
