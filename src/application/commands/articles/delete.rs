// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = lookup::article_id(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = id.0, "article deleted");
        Ok(())
    }
}
