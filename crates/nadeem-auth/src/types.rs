//! Data that crosses the auth boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A user as the identity provider knows them.
///
/// `uid` is the provider's stable identifier. `email` is optional because
/// some providers (anonymous or phone sign-in) don't expose one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-issued unique id.
    pub uid: String,
    /// Email address on record, if the provider shares one.
    pub email: Option<String>,
}

impl Identity {
    /// Creates an identity with no email attached.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
        }
    }

    /// Attaches an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.uid)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Whether a user identity is currently established on this device.
///
/// The provider owns the session's lifetime; the app only reads it.
///
/// Serialized as `{"state":"absent"}` or
/// `{"state":"present","identity":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "identity", rename_all = "snake_case")]
pub enum Session {
    /// Nobody is signed in.
    Absent,
    /// Someone is signed in.
    Present(Identity),
}

impl Session {
    /// Returns `true` if someone is signed in.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Present(identity) => Some(identity),
            Self::Absent => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// The email/password pair for one login attempt.
///
/// The password lives in a [`Zeroizing`] buffer, so its bytes are wiped
/// whenever it is replaced, cleared, or dropped. It is skipped by
/// `Serialize` and redacted by `Debug`, so it cannot leak through a state
/// snapshot or a log line.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    #[serde(skip)]
    password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replaces the password. The previous buffer is wiped on drop.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Zeroizing::new(password.into());
    }

    /// Wipes the password in place, leaving it empty.
    pub fn clear_password(&mut self) {
        self.password.zeroize();
    }

    /// Returns `true` if a (possibly invalid) password has been entered.
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_display_uses_uid() {
        let identity = Identity::new("abc123").with_email("a@b.com");
        assert_eq!(identity.to_string(), "U-abc123");
        assert_eq!(identity.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_session_identity_accessors() {
        let present = Session::Present(Identity::new("u1"));
        assert!(present.is_present());
        assert_eq!(present.identity().map(|i| i.uid.as_str()), Some("u1"));

        assert!(!Session::Absent.is_present());
        assert!(Session::Absent.identity().is_none());
    }

    #[test]
    fn test_session_serializes_with_state_tag() {
        let json = serde_json::to_value(Session::Absent).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "absent" }));

        let json =
            serde_json::to_value(Session::Present(Identity::new("u1"))).unwrap();
        assert_eq!(json["state"], "present");
        assert_eq!(json["identity"]["uid"], "u1");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("a@b.com", "hunter22");
        let printed = format!("{creds:?}");
        assert!(printed.contains("a@b.com"));
        assert!(!printed.contains("hunter22"));
    }

    #[test]
    fn test_credentials_serialize_skips_password() {
        let creds = Credentials::new("a@b.com", "hunter22");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@b.com" }));
    }

    #[test]
    fn test_credentials_clear_password_leaves_email() {
        let mut creds = Credentials::new("a@b.com", "hunter22");
        assert!(creds.has_password());

        creds.clear_password();

        assert!(!creds.has_password());
        assert_eq!(creds.password(), "");
        assert_eq!(creds.email(), "a@b.com");
    }

    #[test]
    fn test_credentials_default_is_empty() {
        let creds = Credentials::default();
        assert_eq!(creds.email(), "");
        assert!(!creds.has_password());
    }
}
