//! Error types for the session layer.

use std::time::Duration;

use nadeem_auth::SessionQueryError;

/// Why the current session could not be determined.
///
/// These never reach the user. The resolver logs them and falls back to
/// [`Route::Login`](crate::Route::Login).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The gateway answered with an error.
    #[error(transparent)]
    Query(#[from] SessionQueryError),

    /// The gateway didn't answer within
    /// [`SessionConfig::query_timeout`](crate::SessionConfig::query_timeout).
    #[error("session query timed out after {0:?}")]
    TimedOut(Duration),
}
