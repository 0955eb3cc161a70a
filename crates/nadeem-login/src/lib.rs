//! The login screen's logic, without the screen.
//!
//! Each login screen instance runs one controller as an isolated Tokio
//! task (actor model). The presentation layer talks to it through a
//! [`LoginHandle`] and renders whatever [`FlowState`] it publishes.
//!
//! # Key types
//!
//! - [`validate_email`] / [`validate_password`]: pure field checks
//! - [`spawn_login`]: starts a controller, returns its handle and event stream
//! - [`LoginHandle`]: send user intents, read the current state
//! - [`FlowState`]: the state machine (Editing → Submitting → Succeeded / Failed)
//! - [`LoginEvent`]: one-shot signals: navigation and transient notices
//! - [`LoginConfig`]: controller settings

mod config;
mod controller;
mod error;
mod state;
mod validate;

pub use config::LoginConfig;
pub use controller::{LoginEvents, LoginHandle, spawn_login};
pub use error::LoginError;
pub use state::{
    Destination, ExitLink, Field, FieldErrors, FlowState, Form, LoginEvent,
    Notice, SocialProvider,
};
pub use validate::{
    CredentialCheck, MIN_PASSWORD_LEN, ValidationError, ValidationResult,
    validate_credentials, validate_email, validate_password,
};
