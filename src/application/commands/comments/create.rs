use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult, forms::CommentForm},
    domain::comment::NewComment,
};

pub struct CreateCommentCommand {
    pub form: CommentForm,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let fields = self.clean_form(command.form).await?;
        let new_comment = NewComment {
            article_id: fields.article_id,
            author: fields.author,
            text: fields.text,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_comment).await?;
        tracing::info!(
            comment_id = created.id.0,
            article_id = created.article_id.0,
            "comment created"
        );
        Ok(created.into())
    }
}
