use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author: comment.author.into_inner(),
            text: comment.text.into_inner(),
            created_at: comment.created_at,
        }
    }
}
