//! Tag repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Resolve tag names to stored rows and persist new tags explicitly.
//!
//! # Invariants
//! - Lookup reports absence as `TagLookup::NotFound`; creating the
//!   missing row is the caller's decision, never a hidden side effect.

use crate::model::tag::Tag;
use crate::model::TagId;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};

/// Outcome of a tag lookup by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    /// A stored row matched the name exactly.
    Found(Tag),
    /// No stored row carries this name.
    NotFound,
}

/// Repository interface for tag rows.
pub trait TagRepository {
    /// Looks one tag up by exact name.
    fn find_by_name(&self, name: &str) -> RepoResult<TagLookup>;
    /// Inserts one tag row and returns its id.
    fn create_tag(&self, name: &str) -> RepoResult<TagId>;
    /// Lists all tags in store order.
    fn list_tags(&self) -> RepoResult<Vec<Tag>>;
}

/// SQLite-backed tag repository.
pub struct SqliteTagRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTagRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TagRepository for SqliteTagRepository<'_> {
    fn find_by_name(&self, name: &str) -> RepoResult<TagLookup> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM tags WHERE name = ?1;")?;
        let mut rows = stmt.query(params![name])?;
        if let Some(row) = rows.next()? {
            let tag = Tag::from_storage(row.get("id")?, row.get("name")?);
            return Ok(TagLookup::Found(tag));
        }

        Ok(TagLookup::NotFound)
    }

    fn create_tag(&self, name: &str) -> RepoResult<TagId> {
        Tag::new(name).validate()?;

        self.conn
            .execute("INSERT INTO tags (name) VALUES (?1);", params![name])?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_tags(&self) -> RepoResult<Vec<Tag>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM tags ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next()? {
            tags.push(Tag::from_storage(row.get("id")?, row.get("name")?));
        }

        Ok(tags)
    }
}
