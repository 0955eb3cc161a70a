//! Identity-provider boundary for Nadeem.
//!
//! This crate defines what the rest of the app knows about
//! authentication, and nothing more:
//!
//! - **Types** ([`Identity`], [`Session`], [`Credentials`]): the data that
//!   flows between the app and the identity provider.
//! - **Gateway** ([`AuthGateway`] trait): the two questions the app asks
//!   the provider: "who is signed in?" and "sign this user in".
//! - **Errors** ([`AuthError`], [`SessionQueryError`]): what the provider
//!   can answer when things go wrong.
//!
//! # Architecture
//!
//! ```text
//! Session layer (launch route) ─┐
//!                               ├─→ Auth layer (this crate) ─→ identity provider
//! Login layer (sign-in form) ───┘
//! ```
//!
//! The provider itself (Firebase, a custom backend, a test double) lives
//! outside the workspace and is injected by the caller.

#![allow(async_fn_in_trait)]

mod error;
mod gateway;
mod types;

pub use error::{AuthError, SessionQueryError};
pub use gateway::AuthGateway;
pub use types::{Credentials, Identity, Session};
