use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Every comment in the store, newest first (`created_at DESC, id DESC`).
    async fn list_newest_first(&self) -> DomainResult<Vec<Comment>>;
    /// Comments attached to one article, newest first.
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
}
