//! Comment domain model.
//!
//! # Invariants
//! - A comment always references an existing post and author.
//! - The body is required and non-blank.

use crate::model::{AuthorId, CommentId, DomainViolation, PostId};
use serde::{Deserialize, Serialize};

/// Persisted comment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable row id.
    pub id: CommentId,
    /// Parent post.
    pub post_id: PostId,
    /// Commenting author.
    pub author_id: AuthorId,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Comment text.
    pub body: String,
}

/// Insertable comment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub body: String,
}

impl NewComment {
    /// Checks required-field rules ahead of persistence.
    pub fn validate(&self) -> Result<(), DomainViolation> {
        if self.body.trim().is_empty() {
            return Err(DomainViolation::EmptyCommentBody);
        }
        Ok(())
    }
}
