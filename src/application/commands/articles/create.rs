// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::application::{dto::ArticleDto, error::ApplicationResult, forms::ArticleForm};

pub struct CreateArticleCommand {
    pub form: ArticleForm,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let fields = self.clean_form(command.form).await?;
        let created = self.write_repo.insert(fields.into()).await?;
        tracing::info!(article_id = created.id.0, "article created");
        Ok(created.into())
    }
}
