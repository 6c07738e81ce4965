//! Author domain model.
//!
//! # Responsibility
//! - Define the author record and its insertable counterpart.
//! - Keep password material write-only: callers can set and check a
//!   password but can never read the stored hash outside this crate.
//!
//! # Invariants
//! - `email` and `display_name` are unique at storage level.
//! - The password hash never appears in serialized output.

use crate::model::password::{hash_password, verify_password, PasswordError};
use crate::model::{AuthorId, DomainViolation};
use serde::{Deserialize, Serialize};

/// Capability interface for session/auth integration.
///
/// The external authentication layer depends on this seam instead of the
/// concrete `Author` type.
pub trait Identifiable {
    /// Stable identity used by the session layer.
    fn id(&self) -> AuthorId;
}

/// Persisted author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable row id.
    pub id: AuthorId,
    /// Unique contact address.
    pub email: String,
    /// Unique public name, also the login username.
    pub display_name: String,
    /// Salted Argon2id hash. Write-only outside the crate.
    #[serde(skip)]
    password_hash: Option<String>,
}

impl Author {
    /// Rebuilds an author from persisted column values.
    pub(crate) fn from_storage(
        id: AuthorId,
        email: String,
        display_name: String,
        password_hash: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            password_hash,
        }
    }

    /// Replaces the stored credential with a fresh salted hash.
    pub fn set_password(&mut self, plain: &str) -> Result<(), PasswordError> {
        self.password_hash = Some(hash_password(plain)?);
        Ok(())
    }

    /// Checks a plaintext candidate against the stored hash.
    ///
    /// Returns `false` when no password has ever been set.
    pub fn check_password(&self, plain: &str) -> bool {
        match self.password_hash.as_deref() {
            Some(stored) => verify_password(plain, stored),
            None => false,
        }
    }

    /// Hash accessor for persistence paths only.
    pub(crate) fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}

impl Identifiable for Author {
    fn id(&self) -> AuthorId {
        self.id
    }
}

/// Insertable author row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    /// Unique contact address.
    pub email: String,
    /// Unique public name.
    pub display_name: String,
    password_hash: Option<String>,
}

impl NewAuthor {
    /// Creates an insertable author without a credential.
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            password_hash: None,
        }
    }

    /// Attaches a salted hash of the given plaintext password.
    pub fn with_password(mut self, plain: &str) -> Result<Self, PasswordError> {
        self.password_hash = Some(hash_password(plain)?);
        Ok(self)
    }

    /// Checks required-field rules ahead of persistence.
    pub fn validate(&self) -> Result<(), DomainViolation> {
        if self.email.trim().is_empty() {
            return Err(DomainViolation::EmptyEmail);
        }
        if self.display_name.trim().is_empty() {
            return Err(DomainViolation::EmptyDisplayName);
        }
        Ok(())
    }

    pub(crate) fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}
