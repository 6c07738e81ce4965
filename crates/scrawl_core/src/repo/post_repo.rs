//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist post rows and load them with their tag names joined in.
//! - Own tag-link replacement logic (`set_post_tags`) with atomic
//!   semantics.
//!
//! # Invariants
//! - Write paths validate domain rules before SQL mutations.
//! - `set_post_tags` replaces the whole tag set in a single transaction
//!   and creates missing tag rows lazily.
//! - Every mutation of a post row moves `updated_at` forward.

use crate::model::post::{NewPost, Post, PostChanges};
use crate::model::{AuthorId, PostId};
use crate::repo::{bool_to_int, int_to_bool, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};

const POST_SELECT_SQL: &str = "SELECT
    id,
    author_id,
    created_at,
    updated_at,
    title,
    slug,
    published,
    short_desc,
    body
FROM posts";

/// Query options for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    /// Restrict to one author's posts.
    pub author: Option<AuthorId>,
    /// Skip drafts.
    pub published_only: bool,
    /// Maximum rows to return. Defaults to 10 and caps at 50.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Repository interface for post rows.
pub trait PostRepository {
    /// Inserts one post and returns its row id.
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId>;
    /// Replaces all mutable columns of an existing post.
    fn update_post(&self, id: PostId, changes: &PostChanges) -> RepoResult<()>;
    /// Gets one post by row id.
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Gets one post by its unique slug.
    fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>>;
    /// Gets one post by exact title. Used by submission validation.
    fn find_by_title(&self, title: &str) -> RepoResult<Option<Post>>;
    /// Lists posts, most recently created first.
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
    /// Replaces all tags of the given post in one transaction.
    fn set_post_tags(&mut self, id: PostId, names: &[String]) -> RepoResult<()>;
}

/// SQLite-backed post repository.
///
/// Holds a mutable connection because tag replacement needs a
/// transaction.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId> {
        post.validate()?;

        self.conn.execute(
            "INSERT INTO posts (author_id, title, slug, published, short_desc, body)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                post.author_id,
                post.title.as_str(),
                post.slug.as_str(),
                bool_to_int(post.published),
                post.short_desc.as_deref(),
                post.body.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_post(&self, id: PostId, changes: &PostChanges) -> RepoResult<()> {
        changes.validate()?;

        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = ?2,
                slug = ?3,
                published = ?4,
                short_desc = ?5,
                body = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![
                id,
                changes.title.as_str(),
                changes.slug.as_str(),
                bool_to_int(changes.published),
                changes.short_desc.as_deref(),
                changes.body.as_deref(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "post", id });
        }

        Ok(())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.select_one(&format!("{POST_SELECT_SQL} WHERE id = ?1;"), Value::from(id))
    }

    fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>> {
        self.select_one(
            &format!("{POST_SELECT_SQL} WHERE slug = ?1;"),
            Value::from(slug.to_string()),
        )
    }

    fn find_by_title(&self, title: &str) -> RepoResult<Option<Post>> {
        self.select_one(
            &format!("{POST_SELECT_SQL} WHERE title = ?1 LIMIT 1;"),
            Value::from(title.to_string()),
        )
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(author_id) = query.author {
            sql.push_str(" AND author_id = ?");
            bind_values.push(Value::Integer(author_id));
        }

        if query.published_only {
            sql.push_str(" AND published = 1");
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC");
        let limit = normalize_post_limit(query.limit);
        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(limit)));
        if query.offset > 0 {
            sql.push_str(" OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            let mut post = parse_post_row(row)?;
            post.tags = load_tags_for_post(self.conn, post.id)?;
            posts.push(post);
        }

        Ok(posts)
    }

    fn set_post_tags(&mut self, id: PostId, names: &[String]) -> RepoResult<()> {
        for name in names {
            crate::model::tag::Tag::new(name.as_str()).validate()?;
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if !post_exists_in_tx(&tx, id)? {
            return Err(RepoError::NotFound { entity: "post", id });
        }

        tx.execute("DELETE FROM post_tags WHERE post_id = ?1;", params![id])?;

        for name in names {
            tx.execute(
                "INSERT OR IGNORE INTO tags (name) VALUES (?1);",
                [name.as_str()],
            )?;
            // OR IGNORE: duplicate names in one call collapse onto the
            // same join row.
            tx.execute(
                "INSERT OR IGNORE INTO post_tags (post_id, tag_id)
                 SELECT ?1, id
                 FROM tags
                 WHERE name = ?2;",
                params![id, name.as_str()],
            )?;
        }

        tx.execute(
            "UPDATE posts
             SET updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![id],
        )?;

        tx.commit()?;
        Ok(())
    }
}

impl SqlitePostRepository<'_> {
    fn select_one(&self, sql: &str, bind: Value) -> RepoResult<Option<Post>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter([bind]))?;
        if let Some(row) = rows.next()? {
            let mut post = parse_post_row(row)?;
            post.tags = load_tags_for_post(self.conn, post.id)?;
            return Ok(Some(post));
        }

        Ok(None)
    }
}

const POSTS_DEFAULT_LIMIT: u32 = 10;
const POSTS_LIMIT_MAX: u32 = 50;

/// Normalizes a list limit: default 10, cap 50, zero falls back to the
/// default.
pub fn normalize_post_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) => POSTS_DEFAULT_LIMIT,
        Some(value) if value > POSTS_LIMIT_MAX => POSTS_LIMIT_MAX,
        Some(value) => value,
        None => POSTS_DEFAULT_LIMIT,
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let published = int_to_bool(row.get("published")?, "posts.published")?;

    Ok(Post {
        id: row.get("id")?,
        author_id: row.get("author_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        title: row.get("title")?,
        slug: row.get("slug")?,
        published,
        short_desc: row.get("short_desc")?,
        body: row.get("body")?,
        tags: Vec::new(),
    })
}

fn load_tags_for_post(conn: &Connection, post_id: PostId) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT t.name
         FROM post_tags pt
         INNER JOIN tags t ON t.id = pt.tag_id
         WHERE pt.post_id = ?1
         ORDER BY t.name ASC;",
    )?;
    let mut rows = stmt.query(params![post_id])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        let name: String = row.get(0)?;
        tags.push(name);
    }
    Ok(tags)
}

fn post_exists_in_tx(tx: &Transaction<'_>, id: PostId) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1);",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
