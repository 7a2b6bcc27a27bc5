use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, category::CategoryRepository, comment::CommentReadRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) comment_repo: Arc<dyn CommentReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            comment_repo,
        }
    }
}
