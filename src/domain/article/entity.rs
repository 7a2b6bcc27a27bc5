// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleText, ArticleTitle, AuthorName};
use crate::domain::category::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: AuthorName,
    pub text: ArticleText,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub author: AuthorName,
    pub text: ArticleText,
    pub category_id: CategoryId,
}

/// Full replacement of an article's editable fields.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: AuthorName,
    pub text: ArticleText,
    pub category_id: CategoryId,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, content: NewArticle) -> Self {
        let NewArticle {
            title,
            author,
            text,
            category_id,
        } = content;
        Self {
            id,
            title,
            author,
            text,
            category_id,
        }
    }
}

impl Article {
    /// Applies an update to an in-memory copy, leaving the identifier untouched.
    pub fn apply(&mut self, update: ArticleUpdate) {
        self.title = update.title;
        self.author = update.author;
        self.text = update.text;
        self.category_id = update.category_id;
    }
}
