//! Post use-case service.
//!
//! # Responsibility
//! - Turn validated submissions into stored posts.
//! - Derive the display slug from the title.
//! - Replace post tags from raw comma-separated input.
//!
//! # Invariants
//! - `revise` uses full content replacement semantics.
//! - Post lists are always sorted by `created_at DESC, id DESC`.
//! - Assigning tags replaces the whole set, never appends.

use crate::forms::post::PostInput;
use crate::model::post::{NewPost, Post, PostChanges};
use crate::model::{AuthorId, PostId};
use crate::repo::post_repo::{normalize_post_limit, PostListQuery, PostRepository};
use crate::repo::{RepoError, RepoResult};
use crate::slug::{parse_tag_names, slugify};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for post use-cases.
#[derive(Debug)]
pub enum PostServiceError {
    /// Target post does not exist.
    PostNotFound(PostId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for PostServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostNotFound(id) => write!(f, "post not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent post state: {details}"),
        }
    }
}

impl Error for PostServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PostServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity: "post", id } => Self::PostNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsPage {
    /// List items sorted by `created_at DESC, id DESC`.
    pub items: Vec<Post>,
    /// Effective normalized limit used by the query.
    pub applied_limit: u32,
}

/// Post service facade over repository implementations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores one validated submission as a new post.
    ///
    /// Derives the slug from the title and replaces the tag set from the
    /// submitted names.
    pub fn submit(
        &mut self,
        author_id: AuthorId,
        input: &PostInput,
    ) -> Result<Post, PostServiceError> {
        let post = NewPost {
            author_id,
            title: input.title.clone(),
            slug: slugify(&input.title),
            published: input.status.is_published(),
            short_desc: some_nonempty(&input.short_desc),
            body: some_nonempty(&input.body),
        };

        let id = self.repo.create_post(&post)?;
        self.repo.set_post_tags(id, &input.tags)?;
        self.read_back(id, "created post not found in read-back")
    }

    /// Replaces an existing post with new validated content.
    pub fn revise(&mut self, id: PostId, input: &PostInput) -> Result<Post, PostServiceError> {
        let changes = PostChanges {
            title: input.title.clone(),
            slug: slugify(&input.title),
            published: input.status.is_published(),
            short_desc: some_nonempty(&input.short_desc),
            body: some_nonempty(&input.body),
        };

        self.repo.update_post(id, &changes)?;
        self.repo.set_post_tags(id, &input.tags)?;
        self.read_back(id, "revised post not found in read-back")
    }

    /// Lists the most recently created posts.
    pub fn newest(&self, limit: Option<u32>, offset: u32) -> Result<PostsPage, PostServiceError> {
        self.list(PostListQuery {
            author: None,
            published_only: false,
            limit,
            offset,
        })
    }

    /// Lists one author's posts, most recent first.
    pub fn by_author(
        &self,
        author_id: AuthorId,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<PostsPage, PostServiceError> {
        self.list(PostListQuery {
            author: Some(author_id),
            published_only: false,
            limit,
            offset,
        })
    }

    /// Gets one post by row id.
    pub fn get(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    /// Gets one post by its unique slug.
    pub fn get_by_slug(&self, slug: &str) -> RepoResult<Option<Post>> {
        self.repo.find_by_slug(slug)
    }

    /// Replaces the full tag set of one post from raw tag input.
    pub fn set_tags(&mut self, id: PostId, raw: &str) -> Result<Post, PostServiceError> {
        let names = parse_tag_names(raw);
        self.repo.set_post_tags(id, &names)?;
        self.read_back(id, "post missing after tag replacement")
    }

    fn list(&self, query: PostListQuery) -> Result<PostsPage, PostServiceError> {
        let applied_limit = normalize_post_limit(query.limit);
        let query = PostListQuery {
            limit: Some(applied_limit),
            ..query
        };
        let items = self.repo.list_posts(&query)?;
        Ok(PostsPage {
            items,
            applied_limit,
        })
    }

    fn read_back(&self, id: PostId, details: &'static str) -> Result<Post, PostServiceError> {
        self.repo
            .get_post(id)?
            .ok_or(PostServiceError::InconsistentState(details))
    }
}

fn some_nonempty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
