//! Error types for the login layer.

/// Errors returned by [`LoginHandle`](crate::LoginHandle) methods.
///
/// Validation and sign-in failures are not errors here: they are states
/// ([`FlowState::Editing`](crate::FlowState::Editing) with field errors,
/// [`FlowState::Failed`](crate::FlowState::Failed)) that the screen renders.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The controller has stopped (disposed, or its task ended), so the
    /// intent could not be delivered.
    #[error("login flow is no longer running")]
    Unavailable,
}
