//! Core data and validation layer for the Scrawl blog.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod forms;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod slug;

pub use forms::login::LoginForm;
pub use forms::post::{PostForm, PostFormError, PostInput, DUPLICATE_TITLE_MESSAGE};
pub use forms::FormErrors;
pub use logging::{init_logging, logging_status};
pub use model::author::{Author, Identifiable, NewAuthor};
pub use model::comment::{Comment, NewComment};
pub use model::password::PasswordError;
pub use model::post::{parse_post_status, NewPost, Post, PostChanges, PostStatus};
pub use model::tag::Tag;
pub use model::{AuthorId, CommentId, DomainViolation, PostId, TagId};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::comment_repo::{CommentRepository, SqliteCommentRepository};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use repo::tag_repo::{SqliteTagRepository, TagLookup, TagRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::{AuthorService, AuthorServiceError};
pub use service::post_service::{PostService, PostServiceError, PostsPage};
pub use service::tag_service::TagService;
pub use slug::{parse_tag_names, slugify, slugify_with};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
