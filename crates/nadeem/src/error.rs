//! Unified error type for the Nadeem facade.

use nadeem_login::LoginError;
use tracing_subscriber::util::TryInitError;

/// Top-level error that wraps the layer errors a caller can hit.
///
/// Session-query failures never appear here: the launch sequence turns
/// them into the login route.
#[derive(Debug, thiserror::Error)]
pub enum NadeemError {
    /// The login controller is gone (disposed or stopped).
    #[error(transparent)]
    Login(#[from] LoginError),

    /// A global tracing subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(#[from] TryInitError),
}
