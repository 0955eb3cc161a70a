//! Launch timing configuration.

use std::time::Duration;

/// Configuration for the launch sequence.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Shortest time the splash screen stays visible, even if the session
    /// query answers instantly.
    ///
    /// Default: 2.5 seconds.
    pub min_display: Duration,

    /// Length of the splash fade-in animation. Purely cosmetic: the
    /// presentation layer reads it, the launch logic does not.
    ///
    /// Default: 1.5 seconds.
    pub fade_in: Duration,

    /// Upper bound on the session query. A query still pending after this
    /// long is abandoned and the user is sent to the login screen.
    ///
    /// Default: 10 seconds.
    pub query_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_display: Duration::from_millis(2_500),
            fade_in: Duration::from_millis(1_500),
            query_timeout: Duration::from_secs(10),
        }
    }
}
