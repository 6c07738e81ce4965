//! Post domain model.
//!
//! # Responsibility
//! - Define the post read model plus its insert/update counterparts.
//! - Map the published/draft submission status onto the stored flag.
//!
//! # Invariants
//! - `slug` is derived from `title` and unique at storage level.
//! - `updated_at` moves forward on every mutation of the row.

use crate::model::{AuthorId, DomainViolation, PostId};
use serde::{Deserialize, Serialize};

/// Submission status choices for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Visible on the front page.
    Published,
    /// Saved but not publicly listed.
    Draft,
}

impl PostStatus {
    /// Maps the status to the stored published flag.
    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

/// Parses a submitted status value.
pub fn parse_post_status(value: &str) -> Option<PostStatus> {
    match value {
        "published" => Some(PostStatus::Published),
        "draft" => Some(PostStatus::Draft),
        _ => None,
    }
}

/// Persisted post record with its tag names joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable row id.
    pub id: PostId,
    /// Owning author.
    pub author_id: AuthorId,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Last mutation time in epoch milliseconds.
    pub updated_at: i64,
    /// Human title as submitted.
    pub title: String,
    /// URL-safe identifier derived from the title.
    pub slug: String,
    /// Whether the post is publicly listed.
    pub published: bool,
    /// Front-page teaser text.
    pub short_desc: Option<String>,
    /// Full body text.
    pub body: Option<String>,
    /// Tag names, ordered by name.
    pub tags: Vec<String>,
}

impl Post {
    /// Joins the tag names into the comma-separated submission form shape.
    pub fn tags_as_string(&self) -> String {
        self.tags.join(",")
    }
}

/// Insertable post row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author_id: AuthorId,
    pub title: String,
    pub slug: String,
    pub published: bool,
    pub short_desc: Option<String>,
    pub body: Option<String>,
}

impl NewPost {
    /// Checks required-field rules ahead of persistence.
    pub fn validate(&self) -> Result<(), DomainViolation> {
        if self.title.trim().is_empty() {
            return Err(DomainViolation::EmptyTitle);
        }
        if self.slug.trim().is_empty() {
            return Err(DomainViolation::EmptySlug);
        }
        Ok(())
    }
}

/// Full-replacement update for an existing post row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub slug: String,
    pub published: bool,
    pub short_desc: Option<String>,
    pub body: Option<String>,
}

impl PostChanges {
    /// Checks required-field rules ahead of persistence.
    pub fn validate(&self) -> Result<(), DomainViolation> {
        if self.title.trim().is_empty() {
            return Err(DomainViolation::EmptyTitle);
        }
        if self.slug.trim().is_empty() {
            return Err(DomainViolation::EmptySlug);
        }
        Ok(())
    }
}
