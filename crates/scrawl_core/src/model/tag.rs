//! Tag domain model.
//!
//! # Invariants
//! - `name` is unique at storage level.
//! - A tag with `id == None` exists only in memory; persisting it is the
//!   caller's responsibility.

use crate::model::{DomainViolation, TagId};
use serde::{Deserialize, Serialize};

/// Tag entity, persisted or not yet saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Row id once persisted, `None` for a freshly constructed tag.
    pub id: Option<TagId>,
    /// Unique tag name.
    pub name: String,
}

impl Tag {
    /// Constructs a new, not-yet-persisted tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Rebuilds a tag from persisted column values.
    pub(crate) fn from_storage(id: TagId, name: String) -> Self {
        Self {
            id: Some(id),
            name,
        }
    }

    /// Whether this tag is backed by a stored row.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks required-field rules ahead of persistence.
    pub fn validate(&self) -> Result<(), DomainViolation> {
        if self.name.trim().is_empty() {
            return Err(DomainViolation::EmptyTagName);
        }
        Ok(())
    }
}
