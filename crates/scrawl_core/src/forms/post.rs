//! Post submission form schema.
//!
//! # Responsibility
//! - Enforce required fields and the status choice set.
//! - Reject titles that collide with an already stored post.
//!
//! # Invariants
//! - Title uniqueness is checked here, against live store state; slug
//!   uniqueness stays a storage constraint.

use crate::forms::{require, FormErrors, INVALID_CHOICE_MESSAGE};
use crate::model::post::{parse_post_status, PostStatus};
use crate::repo::post_repo::PostRepository;
use crate::repo::RepoError;
use crate::slug::parse_tag_names;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown when the submitted title already names a stored post.
pub const DUPLICATE_TITLE_MESSAGE: &str = "This title has already been used.";

/// Failure produced by post form validation.
#[derive(Debug)]
pub enum PostFormError {
    /// One or more fields failed; messages are field-scoped.
    Invalid(FormErrors),
    /// The uniqueness probe against the store failed.
    Repo(RepoError),
}

impl Display for PostFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => {
                write!(f, "post form validation failed")?;
                for (field, messages) in errors.iter() {
                    for message in messages {
                        write!(f, "; {field}: {message}")?;
                    }
                }
                Ok(())
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PostFormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for PostFormError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Submitted post form fields, raw strings as the web layer sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub status: String,
    pub short_desc: String,
    pub body: String,
    pub tags: String,
}

/// Typed, validated submission consumed by `PostService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub status: PostStatus,
    pub short_desc: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl PostForm {
    /// Validates the submission against field rules and store state.
    ///
    /// `title`, `status`, `short_desc` and `body` are required; `status`
    /// must be one of `published`/`draft`; the title must not match any
    /// stored post's title. `tags` is optional free text.
    pub fn validate<R: PostRepository>(&self, posts: &R) -> Result<PostInput, PostFormError> {
        let mut errors = FormErrors::new();

        let has_title = require(&mut errors, "title", &self.title);
        let has_status = require(&mut errors, "status", &self.status);
        require(&mut errors, "short_desc", &self.short_desc);
        require(&mut errors, "body", &self.body);

        let status = if has_status {
            match parse_post_status(self.status.trim()) {
                Some(status) => Some(status),
                None => {
                    errors.add("status", INVALID_CHOICE_MESSAGE);
                    None
                }
            }
        } else {
            None
        };

        if has_title && posts.find_by_title(&self.title)?.is_some() {
            errors.add("title", DUPLICATE_TITLE_MESSAGE);
        }

        if !errors.is_empty() {
            return Err(PostFormError::Invalid(errors));
        }

        Ok(PostInput {
            title: self.title.clone(),
            status: status.expect("status validated above"),
            short_desc: self.short_desc.clone(),
            body: self.body.clone(),
            tags: parse_tag_names(&self.tags),
        })
    }
}
