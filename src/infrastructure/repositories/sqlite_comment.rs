use super::map_sqlx;
use crate::domain::article::{ArticleId, AuthorName};
use crate::domain::comment::{
    Comment, CommentId, CommentReadRepository, CommentText, CommentUpdate, CommentWriteRepository,
    NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const COMMENT_COLUMNS: &str = "id, article_id, author, text, created_at";

#[derive(Clone)]
pub struct SqliteCommentWriteRepository {
    pool: SqlitePool,
}

impl SqliteCommentWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCommentReadRepository {
    pool: SqlitePool,
}

impl SqliteCommentReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: AuthorName::new(row.author)?,
            text: CommentText::new(row.text)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for SqliteCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            text,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (article_id, author, text, created_at) VALUES (?, ?, ?, ?) \
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(article_id))
        .bind(author.as_str())
        .bind(text.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let CommentUpdate {
            id,
            article_id,
            author,
            text,
        } = update;

        let maybe_row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET article_id = ?, author = ?, text = ? WHERE id = ? \
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(article_id))
        .bind(author.as_str())
        .bind(text.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for SqliteCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = ? \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
