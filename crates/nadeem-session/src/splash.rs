//! Splash pacing: hold the splash screen for a minimum time, but never
//! navigate before the session is resolved.
//!
//! The splash has two independent concerns running side by side:
//!
//! ```text
//!   ├── min_display timer ───────────┤
//!   ├── session query ───────────────────────┤
//!                                            └─→ route
//! ```
//!
//! The route is released when *both* are done, so the effective delay is
//! `max(min_display, query latency)`.

use std::time::Duration;

use nadeem_auth::AuthGateway;
use tokio::time::Instant;

use crate::{Route, SessionConfig, SessionResolver};

/// Joins the splash display timer with session resolution.
#[derive(Debug, Clone)]
pub struct SplashGate {
    min_display: Duration,
}

impl SplashGate {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            min_display: config.min_display,
        }
    }

    /// Returns the configured minimum display time.
    pub fn min_display(&self) -> Duration {
        self.min_display
    }

    /// Runs the splash and returns the launch route.
    ///
    /// Completes no earlier than `min_display` and no earlier than the
    /// resolver's answer.
    pub async fn run<G: AuthGateway>(
        &self,
        resolver: &SessionResolver<G>,
    ) -> Route {
        let started = Instant::now();

        let (route, ()) = tokio::join!(
            resolver.resolve(),
            tokio::time::sleep(self.min_display)
        );

        tracing::debug!(
            %route,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "splash finished"
        );
        route
    }
}
