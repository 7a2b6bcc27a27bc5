//! Identifier parsing for lookups. A malformed identifier can never match a
//! stored record, so it is reported as `NotFound` rather than a validation error.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleId;
use crate::domain::comment::CommentId;

pub fn article_id(raw: i64) -> ApplicationResult<ArticleId> {
    ArticleId::new(raw).map_err(|_| ApplicationError::not_found("article not found"))
}

pub fn comment_id(raw: i64) -> ApplicationResult<CommentId> {
    CommentId::new(raw).map_err(|_| ApplicationError::not_found("comment not found"))
}
