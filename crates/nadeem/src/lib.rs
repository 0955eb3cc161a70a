//! # Nadeem
//!
//! Launch and login core for the Nadeem Quran memorization companion.
//!
//! The app's presentation layer (whatever draws the screens) implements
//! nothing here. It builds a [`NadeemApp`] around an
//! [`AuthGateway`](nadeem_auth::AuthGateway), calls
//! [`launch`](NadeemApp::launch), and renders what comes back: the Home
//! screen, or a login screen driven by a
//! [`LoginHandle`](nadeem_login::LoginHandle).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nadeem::prelude::*;
//!
//! nadeem::init_tracing()?;
//! let app = NadeemAppBuilder::new().build(Arc::new(MyGateway::new()));
//! match app.launch().await {
//!     Launch::Home(session) => show_home(session),
//!     Launch::Login(screen) => run_login(screen).await?,
//! }
//! ```

mod app;
mod error;
mod telemetry;

pub use app::{Launch, LoginScreen, NadeemApp, NadeemAppBuilder};
pub use error::NadeemError;
pub use telemetry::init_tracing;

pub mod prelude {
    //! Everything a presentation layer usually needs.

    pub use std::sync::Arc;

    pub use nadeem_auth::{
        AuthError, AuthGateway, Credentials, Identity, Session,
        SessionQueryError,
    };
    pub use nadeem_login::{
        Destination, ExitLink, Field, FieldErrors, FlowState, Form,
        LoginConfig, LoginEvent, LoginHandle, Notice, SocialProvider,
        ValidationError,
    };
    pub use nadeem_session::{Route, SessionConfig};

    pub use crate::{Launch, LoginScreen, NadeemApp, NadeemAppBuilder, NadeemError};
}
