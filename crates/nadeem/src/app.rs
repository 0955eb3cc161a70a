//! `NadeemApp` builder and launch sequence.
//!
//! This is the entry point for the presentation layer. It ties the
//! layers together: auth gateway → session resolution → login flow.

use std::sync::Arc;

use nadeem_auth::{AuthGateway, Session};
use nadeem_login::{LoginConfig, LoginEvents, LoginHandle, spawn_login};
use nadeem_session::{Route, SessionConfig, SessionResolver, SplashGate};

/// Builder for configuring a [`NadeemApp`].
///
/// # Example
///
/// ```rust,ignore
/// use nadeem::prelude::*;
///
/// let app = NadeemAppBuilder::new()
///     .session_config(SessionConfig::default())
///     .login_config(LoginConfig::default())
///     .build(Arc::new(my_gateway));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NadeemAppBuilder {
    session_config: SessionConfig,
    login_config: LoginConfig,
}

impl NadeemAppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the launch timing configuration.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Sets the login flow configuration.
    pub fn login_config(mut self, config: LoginConfig) -> Self {
        self.login_config = config;
        self
    }

    /// Builds the app around the given gateway.
    ///
    /// The same gateway is shared by session resolution and every login
    /// screen the app opens.
    pub fn build<G: AuthGateway>(self, gateway: Arc<G>) -> NadeemApp<G> {
        NadeemApp {
            gateway,
            session_config: self.session_config,
            login_config: self.login_config,
        }
    }
}

/// The app's launch and login core.
pub struct NadeemApp<G: AuthGateway> {
    gateway: Arc<G>,
    session_config: SessionConfig,
    login_config: LoginConfig,
}

/// What to show once the splash screen is done.
pub enum Launch {
    /// Someone is already signed in.
    Home(Session),
    /// Nobody is signed in; here is a running login flow.
    Login(LoginScreen),
}

impl Launch {
    /// The route this launch resolved to.
    pub fn route(&self) -> Route {
        match self {
            Self::Home(_) => Route::Home,
            Self::Login(_) => Route::Login,
        }
    }
}

/// A running login flow: the handle to drive it and its event stream.
pub struct LoginScreen {
    pub handle: LoginHandle,
    pub events: LoginEvents,
}

impl<G: AuthGateway> NadeemApp<G> {
    /// Runs the splash sequence and returns where to go next.
    ///
    /// Waits for `max(min_display, session query)`. The session is
    /// queried exactly once per launch.
    pub async fn launch(&self) -> Launch {
        let resolver = SessionResolver::new(
            Arc::clone(&self.gateway),
            self.session_config.clone(),
        );
        let route = SplashGate::new(&self.session_config).run(&resolver).await;
        tracing::info!(%route, "launch route decided");

        match route {
            Route::Home => Launch::Home(resolver.resolve_session().await.clone()),
            Route::Login => Launch::Login(self.login_screen()),
        }
    }

    /// Opens a fresh login flow, e.g. after the user signs out.
    pub fn login_screen(&self) -> LoginScreen {
        let (handle, events) =
            spawn_login(Arc::clone(&self.gateway), self.login_config.clone());
        LoginScreen { handle, events }
    }

    /// The launch timing configuration (the presentation layer reads
    /// `fade_in` from here).
    pub fn session_config(&self) -> &SessionConfig {
        &self.session_config
    }
}
