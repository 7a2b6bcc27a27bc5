// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        ports::time::Clock,
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            comments::CommentQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        comment::{CommentReadRepository, CommentWriteRepository},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_write_repo: Arc<dyn CommentWriteRepository>,
        comment_read_repo: Arc<dyn CommentReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&comment_read_repo),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_write_repo),
            Arc::clone(&comment_read_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_read_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            category_queries,
        }
    }
}
