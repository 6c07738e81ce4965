//! Comment repository contract and SQLite implementation.
//!
//! # Invariants
//! - Write paths validate domain rules before SQL mutations.
//! - Comments list oldest first, the reading order under a post.

use crate::model::comment::{Comment, NewComment};
use crate::model::{CommentId, PostId};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

/// Repository interface for comment rows.
pub trait CommentRepository {
    /// Inserts one comment and returns its row id.
    fn create_comment(&self, comment: &NewComment) -> RepoResult<CommentId>;
    /// Lists all comments under one post, oldest first.
    fn list_for_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn create_comment(&self, comment: &NewComment) -> RepoResult<CommentId> {
        comment.validate()?;

        self.conn.execute(
            "INSERT INTO comments (post_id, author_id, body)
             VALUES (?1, ?2, ?3);",
            params![comment.post_id, comment.author_id, comment.body.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_for_post(&self, post_id: PostId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, post_id, author_id, created_at, body
             FROM comments
             WHERE post_id = ?1
             ORDER BY created_at ASC, id ASC;",
        )?;
        let mut rows = stmt.query(params![post_id])?;
        let mut comments = Vec::new();
        while let Some(row) = rows.next()? {
            comments.push(parse_comment_row(row)?);
        }

        Ok(comments)
    }
}

fn parse_comment_row(row: &Row<'_>) -> RepoResult<Comment> {
    Ok(Comment {
        id: row.get("id")?,
        post_id: row.get("post_id")?,
        author_id: row.get("author_id")?,
        created_at: row.get("created_at")?,
        body: row.get("body")?,
    })
}
