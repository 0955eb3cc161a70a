//! Credential validation: pure, synchronous, total.
//!
//! Every input string maps to exactly one [`ValidationResult`]. Nothing
//! here touches the network; an address that *looks* right is `Valid`
//! even if no mailbox exists behind it.

use std::sync::LazyLock;

use nadeem_auth::Credentials;
use regex::Regex;
use serde::Serialize;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Local part, `@`, then dot-separated domain labels with at least one dot.
/// No whitespace can match anywhere.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9+._%-]{1,256}@[A-Za-z0-9][A-Za-z0-9-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9-]{0,25})+$",
    )
    .expect("valid email shape regex")
});

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The email is empty or not shaped like `local@domain.tld`.
    #[error("empty or malformed")]
    EmptyOrMalformed,

    /// The password has fewer than [`MIN_PASSWORD_LEN`] characters.
    #[error("too short")]
    TooShort,
}

/// The outcome of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }
}

/// Checks that `email` is non-empty and has the shape of an address.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() || !EMAIL_SHAPE.is_match(email) {
        ValidationResult::Invalid(ValidationError::EmptyOrMalformed)
    } else {
        ValidationResult::Valid
    }
}

/// Checks that `password` has at least [`MIN_PASSWORD_LEN`] characters.
///
/// Length is counted in `char`s, so "كلمةسر" counts as 6, not 12 bytes.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() < MIN_PASSWORD_LEN {
        ValidationResult::Invalid(ValidationError::TooShort)
    } else {
        ValidationResult::Valid
    }
}

/// Both field results for one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialCheck {
    pub email: ValidationResult,
    pub password: ValidationResult,
}

impl CredentialCheck {
    /// `true` only when both fields are valid.
    pub fn is_valid(&self) -> bool {
        self.email.is_valid() && self.password.is_valid()
    }
}

/// Runs both validators. Neither short-circuits the other, so the user
/// sees every problem at once.
pub fn validate_credentials(credentials: &Credentials) -> CredentialCheck {
    CredentialCheck {
        email: validate_email(credentials.email()),
        password: validate_password(credentials.password()),
    }
}
