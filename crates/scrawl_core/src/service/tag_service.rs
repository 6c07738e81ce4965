//! Tag use-case service.
//!
//! # Responsibility
//! - Resolve tag names to entities, constructing unsaved tags for names
//!   the store does not know yet.
//!
//! # Invariants
//! - `get_or_create` never persists; committing a fresh tag is the
//!   caller's responsibility.
//! - `parse_tag_string` preserves submission order and duplicates.

use crate::model::tag::Tag;
use crate::repo::tag_repo::{TagLookup, TagRepository};
use crate::repo::RepoResult;
use crate::slug::parse_tag_names;

/// Tag service facade over repository implementations.
pub struct TagService<R: TagRepository> {
    repo: R,
}

impl<R: TagRepository> TagService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the stored tag with this name, or a fresh unsaved one.
    pub fn get_or_create(&self, name: &str) -> RepoResult<Tag> {
        match self.repo.find_by_name(name)? {
            TagLookup::Found(tag) => Ok(tag),
            TagLookup::NotFound => Ok(Tag::new(name)),
        }
    }

    /// Resolves a comma-separated tag string into tag entities.
    ///
    /// Order and duplicates follow the input; blank entries are dropped.
    /// Empty input yields an empty list.
    pub fn parse_tag_string(&self, raw: &str) -> RepoResult<Vec<Tag>> {
        let mut tags = Vec::new();
        for name in parse_tag_names(raw) {
            tags.push(self.get_or_create(&name)?);
        }
        Ok(tags)
    }

    /// Lists all tags known by storage.
    pub fn all(&self) -> RepoResult<Vec<Tag>> {
        self.repo.list_tags()
    }
}
