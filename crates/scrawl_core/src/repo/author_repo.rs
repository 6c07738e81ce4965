//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist author rows and resolve login lookups.
//!
//! # Invariants
//! - `get_by_username` matches the display name exactly and reports
//!   absence as `Ok(None)`, never as an error.
//! - Email and display name uniqueness is enforced by the store.

use crate::model::author::{Author, NewAuthor};
use crate::model::AuthorId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    email,
    display_name,
    password_hash
FROM authors";

/// Repository interface for author rows.
pub trait AuthorRepository {
    /// Inserts one author and returns its row id.
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId>;
    /// Gets one author by row id.
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Gets one author by exact display name.
    fn get_by_username(&self, display_name: &str) -> RepoResult<Option<Author>>;
    /// Replaces the stored credential hash.
    fn update_password_hash(&self, id: AuthorId, password_hash: &str) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId> {
        author.validate()?;

        self.conn.execute(
            "INSERT INTO authors (email, display_name, password_hash)
             VALUES (?1, ?2, ?3);",
            params![
                author.email.as_str(),
                author.display_name.as_str(),
                author.password_hash(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }

    fn get_by_username(&self, display_name: &str) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE display_name = ?1;"))?;
        let mut rows = stmt.query(params![display_name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }

    fn update_password_hash(&self, id: AuthorId, password_hash: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE authors SET password_hash = ?2 WHERE id = ?1;",
            params![id, password_hash],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "author",
                id,
            });
        }

        Ok(())
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author::from_storage(
        row.get("id")?,
        row.get("email")?,
        row.get("display_name")?,
        row.get("password_hash")?,
    ))
}
