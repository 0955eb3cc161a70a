//! Integration tests for launch pacing.
//!
//! Uses `start_paused = true` so Tokio's clock only moves when every task
//! is idle. Sleeps resolve instantly in wall-clock terms while the
//! virtual clock records exactly how long the gate waited.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use nadeem_auth::{
    AuthError, AuthGateway, Credentials, Identity, Session, SessionQueryError,
};
use nadeem_session::{Route, SessionConfig, SessionResolver, SplashGate};
use tokio::time::Instant;

// =========================================================================
// Helpers
// =========================================================================

/// A gateway whose session query takes `latency` and then reports
/// `session` (or an error when `session` is `None`).
struct SlowGateway {
    latency: Duration,
    session: Option<Session>,
    queries: AtomicUsize,
}

impl SlowGateway {
    fn new(latency: Duration, session: Option<Session>) -> Arc<Self> {
        Arc::new(Self {
            latency,
            session,
            queries: AtomicUsize::new(0),
        })
    }
}

impl AuthGateway for SlowGateway {
    async fn current_session(&self) -> Result<Session, SessionQueryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.session
            .clone()
            .ok_or_else(|| SessionQueryError("provider unreachable".into()))
    }

    async fn sign_in(
        &self,
        _credentials: &Credentials,
    ) -> Result<Identity, AuthError> {
        Err(AuthError::new("not used"))
    }
}

fn signed_in() -> Option<Session> {
    Some(Session::Present(Identity::new("u1")))
}

fn config() -> SessionConfig {
    SessionConfig::default()
}

// =========================================================================
// Timing
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_fast_query_waits_for_min_display() {
    let gateway = SlowGateway::new(Duration::from_millis(100), signed_in());
    let resolver = SessionResolver::new(gateway, config());
    let gate = SplashGate::new(&config());
    let started = Instant::now();

    let route = gate.run(&resolver).await;

    assert_eq!(route, Route::Home);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(2_500), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(2_600), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_slow_query_holds_splash_past_min_display() {
    // The old behaviour navigated after a fixed timer even if the query
    // was still in flight. The gate must wait for the answer instead.
    let gateway = SlowGateway::new(Duration::from_secs(4), signed_in());
    let resolver = SessionResolver::new(gateway, config());
    let gate = SplashGate::new(&config());
    let started = Instant::now();

    let route = gate.run(&resolver).await;

    assert_eq!(route, Route::Home);
    assert!(resolver.is_resolved());
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(4), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(4_100), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_query_slower_than_timeout_routes_to_login_at_timeout() {
    let gateway = SlowGateway::new(Duration::from_secs(60), signed_in());
    let config = SessionConfig {
        query_timeout: Duration::from_secs(5),
        ..config()
    };
    let resolver = SessionResolver::new(gateway, config.clone());
    let gate = SplashGate::new(&config);
    let started = Instant::now();

    let route = gate.run(&resolver).await;

    assert_eq!(route, Route::Login);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(5), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(6), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_zero_min_display_releases_on_resolution() {
    let gateway = SlowGateway::new(Duration::from_millis(300), Some(Session::Absent));
    let config = SessionConfig {
        min_display: Duration::ZERO,
        ..config()
    };
    let resolver = SessionResolver::new(gateway, config.clone());
    let gate = SplashGate::new(&config);
    let started = Instant::now();

    let route = gate.run(&resolver).await;

    assert_eq!(route, Route::Login);
    assert!(started.elapsed() >= Duration::from_millis(300));
    assert_eq!(gate.min_display(), Duration::ZERO);
}

// =========================================================================
// Routing
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_query_error_routes_to_login() {
    let gateway = SlowGateway::new(Duration::from_millis(10), None);
    let resolver = SessionResolver::new(Arc::clone(&gateway), config());

    let route = SplashGate::new(&config()).run(&resolver).await;

    assert_eq!(route, Route::Login);
    assert_eq!(gateway.queries.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_gate_then_resolve_session_does_not_requery() {
    let gateway = SlowGateway::new(Duration::from_millis(10), signed_in());
    let resolver = SessionResolver::new(Arc::clone(&gateway), config());

    SplashGate::new(&config()).run(&resolver).await;
    let session = resolver.resolve_session().await;

    assert!(session.is_present());
    assert_eq!(gateway.queries.load(Ordering::SeqCst), 1);
}
