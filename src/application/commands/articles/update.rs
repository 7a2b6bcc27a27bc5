use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        forms::ArticleForm,
        lookup,
    },
    domain::article::ArticleUpdate,
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub form: ArticleForm,
}

impl ArticleCommandService {
    /// Overwrites title, author, text and category. On invalid input the
    /// stored record is left as it was.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = lookup::article_id(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let fields = self.clean_form(command.form).await?;
        let updated = self
            .write_repo
            .update(ArticleUpdate::new(id, fields.into()))
            .await?;
        tracing::info!(article_id = updated.id.0, "article updated");
        Ok(updated.into())
    }
}
