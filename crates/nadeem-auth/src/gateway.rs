//! The [`AuthGateway`] trait: the app's only door to the identity provider.
//!
//! Nadeem doesn't implement authentication itself. The provider could be
//! Firebase, a self-hosted backend, or an in-memory double in tests. The
//! launch and login flows are written against this trait and receive an
//! implementation from whoever builds the app, instead of looking up a
//! global client.

use crate::{AuthError, Credentials, Identity, Session, SessionQueryError};

/// Answers the two questions the app asks an identity provider.
///
/// # Trait bounds
///
/// - `Send + Sync` → one gateway is shared (behind an `Arc`) by the
///   session resolver and the login controller, which run on Tokio tasks.
/// - `'static` → the gateway outlives any single screen.
///
/// # Example
///
/// ```rust
/// use nadeem_auth::{AuthError, AuthGateway, Credentials, Identity, Session, SessionQueryError};
///
/// /// Nobody is ever signed in; every password except "open-sesame" fails.
/// struct DevGateway;
///
/// impl AuthGateway for DevGateway {
///     async fn current_session(&self) -> Result<Session, SessionQueryError> {
///         Ok(Session::Absent)
///     }
///
///     async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
///         if credentials.password() == "open-sesame" {
///             Ok(Identity::new("dev-user").with_email(credentials.email()))
///         } else {
///             Err(AuthError::new("invalid-credential"))
///         }
///     }
/// }
/// ```
pub trait AuthGateway: Send + Sync + 'static {
    /// Reports who (if anyone) is currently signed in.
    ///
    /// Called once per launch by the session resolver.
    fn current_session(
        &self,
    ) -> impl std::future::Future<Output = Result<Session, SessionQueryError>> + Send;

    /// Attempts an email/password sign-in.
    ///
    /// # Returns
    /// - `Ok(Identity)`: the provider accepted the credentials
    /// - `Err(AuthError)`: rejected or failed; the message is shown to the user
    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<Identity, AuthError>> + Send;
}
