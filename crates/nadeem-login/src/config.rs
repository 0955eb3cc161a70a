//! Login controller configuration.

/// Settings for one login flow.
#[derive(Debug, Clone)]
pub struct LoginConfig {
    /// Wipe the password after a rejected sign-in, so the user must
    /// retype it. When `false` it stays in the form, editable, and is
    /// only sent again on an explicit submit.
    ///
    /// Default: `false`.
    pub clear_password_on_failure: bool,

    /// Capacity of the intent channel between handle and controller.
    /// Senders wait when it is full.
    ///
    /// Default: 32.
    pub intent_buffer: usize,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            clear_password_on_failure: false,
            intent_buffer: 32,
        }
    }
}
