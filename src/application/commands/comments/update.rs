use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        forms::CommentForm,
        lookup,
    },
    domain::comment::CommentUpdate,
};

pub struct UpdateCommentCommand {
    pub id: i64,
    pub form: CommentForm,
}

impl CommentCommandService {
    /// Rewrites article, author and text; the creation time is kept.
    pub async fn update_comment(
        &self,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = lookup::comment_id(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let fields = self.clean_form(command.form).await?;
        let update = CommentUpdate {
            id,
            article_id: fields.article_id,
            author: fields.author,
            text: fields.text,
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(comment_id = updated.id.0, "comment updated");
        Ok(updated.into())
    }
}
