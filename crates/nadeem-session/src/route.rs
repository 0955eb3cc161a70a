//! The initial destination decided at launch.

use std::fmt;

use nadeem_auth::Session;
use serde::{Deserialize, Serialize};

/// Where the app goes after the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// A session exists; skip the login screen.
    Home,
    /// No session (or we couldn't tell); show the login screen.
    Login,
}

impl From<&Session> for Route {
    fn from(session: &Session) -> Self {
        match session {
            Session::Present(_) => Self::Home,
            Session::Absent => Self::Login,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Login => write!(f, "Login"),
        }
    }
}
