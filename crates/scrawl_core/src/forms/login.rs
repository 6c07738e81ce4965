//! Login form schema.

use crate::forms::FormErrors;

/// Submitted login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// Validates the submission.
    ///
    /// Always succeeds: field presence is not enforced here, and
    /// credential correctness is the auth layer's concern
    /// (`AuthorService::authenticate`). Empty submissions therefore pass
    /// and fail later at the credential check.
    pub fn validate(&self) -> Result<(), FormErrors> {
        Ok(())
    }
}
