//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep web/form layers decoupled from storage details.

pub mod author_service;
pub mod post_service;
pub mod tag_service;
