use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDetailDto,
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct GetArticleDetailQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_detail(
        &self,
        query: GetArticleDetailQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = lookup::article_id(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let category = self.category_repo.find_by_id(article.category_id).await?;
        let comments = self.comment_repo.list_for_article(id).await?;

        Ok(ArticleDetailDto {
            article: article.into(),
            category: category.map(Into::into),
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }
}
