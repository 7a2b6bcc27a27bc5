use super::CommentQueryService;
use crate::application::{dto::CommentDto, error::ApplicationResult};

impl CommentQueryService {
    /// All comments across every article, newest first. Comments of a single
    /// article come from `ArticleQueryService::get_article_detail`.
    pub async fn list_comments(&self) -> ApplicationResult<Vec<CommentDto>> {
        let comments = self.read_repo.list_newest_first().await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
