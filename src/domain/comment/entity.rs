// src/domain/comment/entity.rs
use crate::domain::article::{ArticleId, AuthorName};
use crate::domain::comment::value_objects::{CommentId, CommentText};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: AuthorName,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: AuthorName,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}

/// Rewrites the editable fields of a comment. `created_at` is not part of it.
#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: AuthorName,
    pub text: CommentText,
}
