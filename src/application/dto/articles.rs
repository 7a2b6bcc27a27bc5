use crate::application::dto::{CategoryDto, CommentDto};
use crate::domain::article::Article;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub text: String,
    pub category_id: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            author: article.author.into_inner(),
            text: article.text.into_inner(),
            category_id: article.category_id.into(),
        }
    }
}

/// Everything the article page shows: the record, its category and its comments.
#[derive(Debug, Clone)]
pub struct ArticleDetailDto {
    pub article: ArticleDto,
    pub category: Option<CategoryDto>,
    pub comments: Vec<CommentDto>,
}
