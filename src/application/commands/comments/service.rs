use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        forms::{CommentFields, CommentForm, FormErrors, FormInput, INVALID_CHOICE},
        ports::ClockPort,
    },
    domain::{
        article::ArticleReadRepository,
        comment::{CommentReadRepository, CommentWriteRepository},
    },
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl CommentCommandService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        read_repo: Arc<dyn CommentReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_repo,
            clock,
        }
    }

    pub(super) async fn clean_form(&self, form: CommentForm) -> ApplicationResult<CommentFields> {
        let fields = form.into_fields()?;
        if self
            .article_repo
            .find_by_id(fields.article_id)
            .await?
            .is_none()
        {
            return Err(FormErrors::single("article", INVALID_CHOICE).into());
        }
        Ok(fields)
    }
}
