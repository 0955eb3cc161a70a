//! Launch-time session resolution for Nadeem.
//!
//! This crate decides where the app goes when it starts:
//!
//! 1. **Resolution**: ask the identity provider, once, whether someone is
//!    signed in ([`SessionResolver`]).
//! 2. **Pacing**: keep the splash screen up for a minimum time without
//!    ever navigating before the answer is in ([`SplashGate`]).
//!
//! # How it fits in the stack
//!
//! ```text
//! App facade (above)  ← shows Home or hands off to the login flow
//!     ↕
//! Session Layer (this crate)  ← decides the initial Route
//!     ↕
//! Auth Layer (below)  ← AuthGateway, Session
//! ```

mod config;
mod error;
mod resolver;
mod route;
mod splash;

pub use config::SessionConfig;
pub use error::SessionError;
pub use resolver::SessionResolver;
pub use route::Route;
pub use splash::SplashGate;
