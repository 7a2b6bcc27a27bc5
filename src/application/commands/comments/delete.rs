use super::CommentCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = lookup::comment_id(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(comment_id = id.0, "comment deleted");
        Ok(())
    }
}
