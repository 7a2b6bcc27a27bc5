// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        forms::{ArticleFields, ArticleForm, FormErrors, FormInput, INVALID_CHOICE},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
        }
    }

    /// Runs the form rules, then checks that the chosen category exists.
    pub(super) async fn clean_form(&self, form: ArticleForm) -> ApplicationResult<ArticleFields> {
        let fields = form.into_fields()?;
        if self
            .category_repo
            .find_by_id(fields.category_id)
            .await?
            .is_none()
        {
            return Err(FormErrors::single("category", INVALID_CHOICE).into());
        }
        Ok(fields)
    }
}
