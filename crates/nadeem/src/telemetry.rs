//! Tracing setup for binaries built on Nadeem.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::NadeemError;

/// Installs a formatted tracing subscriber as the global default.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
///
/// # Errors
/// Returns [`NadeemError::Tracing`] if a global subscriber is already set.
pub fn init_tracing() -> Result<(), NadeemError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish()
        .try_init()?;
    Ok(())
}
