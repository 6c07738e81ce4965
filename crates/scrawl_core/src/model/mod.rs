//! Domain model for the blog data layer.
//!
//! # Responsibility
//! - Define the entity records (author, post, comment, tag) shared by
//!   repositories, services and form validation.
//! - Centralize domain-level constraint violations raised before SQL runs.
//!
//! # Invariants
//! - Every persisted entity is identified by a stable integer row id.
//! - Password material only exists as a salted hash, never as plaintext.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author;
pub mod comment;
pub mod password;
pub mod post;
pub mod tag;

/// Stable identifier for an author row.
pub type AuthorId = i64;
/// Stable identifier for a post row.
pub type PostId = i64;
/// Stable identifier for a comment row.
pub type CommentId = i64;
/// Stable identifier for a tag row.
pub type TagId = i64;

/// Domain constraint violation detected before persistence.
///
/// Repository write paths check these ahead of any SQL mutation, so the
/// store never sees rows that break required-field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainViolation {
    EmptyEmail,
    EmptyDisplayName,
    EmptyTitle,
    EmptySlug,
    EmptyCommentBody,
    EmptyTagName,
}

impl Display for DomainViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "author email must not be blank"),
            Self::EmptyDisplayName => write!(f, "author display name must not be blank"),
            Self::EmptyTitle => write!(f, "post title must not be blank"),
            Self::EmptySlug => write!(f, "post slug must not be blank"),
            Self::EmptyCommentBody => write!(f, "comment body must not be blank"),
            Self::EmptyTagName => write!(f, "tag name must not be blank"),
        }
    }
}

impl Error for DomainViolation {}
