//! The session resolver: answers "is someone signed in?" once per launch.
//!
//! # Fail-safe policy
//!
//! Anything other than a clear `Session::Present` from the gateway
//! (an error, a timeout) resolves to `Session::Absent`, which routes to
//! the login screen. The resolver never guesses its way into Home.

use std::sync::Arc;

use nadeem_auth::{AuthGateway, Session};
use tokio::sync::OnceCell;

use crate::{Route, SessionConfig, SessionError};

/// Resolves the launch route from the gateway's current session.
///
/// The first call to [`resolve`](Self::resolve) (or
/// [`resolve_session`](Self::resolve_session)) queries the gateway; every
/// later or concurrent call waits for and reuses that one answer. One
/// resolver therefore issues at most one session query.
pub struct SessionResolver<G: AuthGateway> {
    gateway: Arc<G>,
    config: SessionConfig,
    outcome: OnceCell<Session>,
}

impl<G: AuthGateway> SessionResolver<G> {
    /// Creates a resolver. Nothing is queried until the first `resolve`.
    pub fn new(gateway: Arc<G>, config: SessionConfig) -> Self {
        Self {
            gateway,
            config,
            outcome: OnceCell::new(),
        }
    }

    /// Returns [`Route::Home`] if a session is present, otherwise
    /// [`Route::Login`].
    pub async fn resolve(&self) -> Route {
        Route::from(self.resolve_session().await)
    }

    /// Returns the resolved session (after fail-safe mapping).
    pub async fn resolve_session(&self) -> &Session {
        self.outcome
            .get_or_init(|| async {
                match self.query().await {
                    Ok(session) => {
                        tracing::info!(
                            present = session.is_present(),
                            "session resolved"
                        );
                        session
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "session query failed, treating as signed out"
                        );
                        Session::Absent
                    }
                }
            })
            .await
    }

    /// Returns `true` once the query has completed.
    pub fn is_resolved(&self) -> bool {
        self.outcome.initialized()
    }

    async fn query(&self) -> Result<Session, SessionError> {
        let timeout = self.config.query_timeout;
        match tokio::time::timeout(timeout, self.gateway.current_session())
            .await
        {
            Ok(result) => Ok(result?),
            Err(_) => Err(SessionError::TimedOut(timeout)),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
