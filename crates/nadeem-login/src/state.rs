//! Login flow state machine types and outbound signals.

use std::fmt;

use nadeem_auth::{Credentials, Identity};
use serde::Serialize;

use crate::{CredentialCheck, ValidationError};

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// An editable input field on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Password => write!(f, "password"),
        }
    }
}

/// Per-field validation errors from the last submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl From<&CredentialCheck> for FieldErrors {
    fn from(check: &CredentialCheck) -> Self {
        Self {
            email: check.email.error(),
            password: check.password.error(),
        }
    }
}

/// What the user has typed, plus what's wrong with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Form {
    pub credentials: Credentials,
    pub errors: FieldErrors,
    /// Whether the password is shown in clear text. Cosmetic only.
    pub secret_visible: bool,
}

impl Form {
    /// Replaces one field's value and clears that field's error.
    ///
    /// Errors are cleared on edit rather than on the next submit, so a
    /// message never lingers next to text the user already changed.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.credentials.set_email(value),
            Field::Password => self.credentials.set_password(value),
        }
        self.errors.clear(field);
    }
}

// ---------------------------------------------------------------------------
// FlowState
// ---------------------------------------------------------------------------

/// The login screen's single source of truth.
///
/// ```text
///              edit / invalid submit
///                 ┌──────┐
///                 ▼      │
///   ──→ Editing ──┴──(valid submit)──→ Submitting ──(ok)──→ Succeeded
///          ▲                                │
///          │                              (err)
///          │                                ▼
///          └──────────(edit)─────────────  Failed ──(submit = retry)──→ …
/// ```
///
/// The controller replaces the whole value on every transition; the
/// presentation layer renders from it and keeps no copy of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlowState {
    /// The user is filling in the form.
    Editing { form: Form },

    /// A sign-in request is in flight. Edits and submits are ignored.
    Submitting { form: Form },

    /// Signed in. The password has been discarded.
    Succeeded { email: String, identity: Identity },

    /// The provider rejected the attempt. `message` is its text, verbatim.
    Failed { form: Form, message: String },
}

impl FlowState {
    /// The form, unless the flow has already succeeded.
    pub fn form(&self) -> Option<&Form> {
        match self {
            Self::Editing { form }
            | Self::Submitting { form }
            | Self::Failed { form, .. } => Some(form),
            Self::Succeeded { .. } => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The provider's error message while in `Failed`.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Editing { .. } | Self::Failed { .. })
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::Editing {
            form: Form::default(),
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editing { .. } => write!(f, "Editing"),
            Self::Submitting { .. } => write!(f, "Submitting"),
            Self::Succeeded { .. } => write!(f, "Succeeded"),
            Self::Failed { .. } => write!(f, "Failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outbound signals
// ---------------------------------------------------------------------------

/// Screens the login flow can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Home,
    Register,
    ForgotPassword,
}

/// Links on the login screen that leave the flow without signing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitLink {
    Register,
    ForgotPassword,
}

impl From<ExitLink> for Destination {
    fn from(link: ExitLink) -> Self {
        match link {
            ExitLink::Register => Self::Register,
            ExitLink::ForgotPassword => Self::ForgotPassword,
        }
    }
}

/// Third-party sign-in buttons shown on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialProvider {
    Google,
    Apple,
    Facebook,
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => write!(f, "Google"),
            Self::Apple => write!(f, "Apple"),
            Self::Facebook => write!(f, "Facebook"),
        }
    }
}

/// A transient, non-blocking message for the user (a toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A sign-in attempt failed with the provider's message.
    SignInFailed { message: String },
    /// A social sign-in button was pressed; that provider isn't wired up.
    ProviderUnavailable { provider: SocialProvider },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignInFailed { message } => {
                write!(f, "Login failed: {message}")
            }
            Self::ProviderUnavailable { provider } => {
                write!(f, "Sign-in with {provider} is coming soon")
            }
        }
    }
}

/// A one-shot signal from the controller to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "detail", rename_all = "snake_case")]
pub enum LoginEvent {
    /// Leave the login screen for `Destination`.
    Navigate(Destination),
    /// Show a transient message.
    Notice(Notice),
}
