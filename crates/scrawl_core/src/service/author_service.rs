//! Author use-case service.
//!
//! # Responsibility
//! - Register authors with salted credentials.
//! - Resolve login lookups and credential checks for the auth layer.
//!
//! # Invariants
//! - Plaintext passwords never leave this layer; only hashes persist.
//! - Unknown usernames and wrong passwords are indistinguishable to
//!   `authenticate` callers.

use crate::model::author::{Author, NewAuthor};
use crate::model::password::{hash_password, PasswordError};
use crate::model::AuthorId;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for author use-cases.
#[derive(Debug)]
pub enum AuthorServiceError {
    /// Credential hashing failed.
    Password(PasswordError),
    /// Target author does not exist.
    AuthorNotFound(AuthorId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for AuthorServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Password(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent author state: {details}"),
        }
    }
}

impl Error for AuthorServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Password(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PasswordError> for AuthorServiceError {
    fn from(value: PasswordError) -> Self {
        Self::Password(value)
    }
}

impl From<RepoError> for AuthorServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity: "author", id } => Self::AuthorNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Author service facade over repository implementations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers one author, hashing the password when given.
    pub fn register(
        &self,
        email: impl Into<String>,
        display_name: impl Into<String>,
        password: Option<&str>,
    ) -> Result<Author, AuthorServiceError> {
        let mut author = NewAuthor::new(email, display_name);
        if let Some(plain) = password {
            author = author.with_password(plain)?;
        }

        let id = self.repo.create_author(&author)?;
        self.repo
            .get_author(id)?
            .ok_or(AuthorServiceError::InconsistentState(
                "created author not found in read-back",
            ))
    }

    /// Gets one author by exact display name, `None` when unknown.
    pub fn get_by_username(&self, display_name: &str) -> RepoResult<Option<Author>> {
        self.repo.get_by_username(display_name)
    }

    /// Resolves login credentials to an author.
    ///
    /// Returns `None` for an unknown username as well as a wrong
    /// password.
    pub fn authenticate(&self, username: &str, password: &str) -> RepoResult<Option<Author>> {
        let Some(author) = self.repo.get_by_username(username)? else {
            return Ok(None);
        };

        if author.check_password(password) {
            Ok(Some(author))
        } else {
            Ok(None)
        }
    }

    /// Replaces an author's credential with a hash of the new plaintext.
    pub fn change_password(
        &self,
        id: AuthorId,
        plain: &str,
    ) -> Result<(), AuthorServiceError> {
        let hash = hash_password(plain)?;
        self.repo.update_password_hash(id, &hash)?;
        Ok(())
    }
}
