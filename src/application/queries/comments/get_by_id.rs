use super::CommentQueryService;
use crate::application::{
    dto::CommentDto,
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct GetCommentByIdQuery {
    pub id: i64,
}

impl CommentQueryService {
    pub async fn get_comment_by_id(
        &self,
        query: GetCommentByIdQuery,
    ) -> ApplicationResult<CommentDto> {
        let id = lookup::comment_id(query.id)?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(comment.into())
    }
}
