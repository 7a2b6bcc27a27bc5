use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = ?")
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories ORDER BY name, id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn ensure(&self, name: CategoryName) -> DomainResult<Category> {
        sqlx::query(
            "INSERT INTO categories (name) VALUES (?) ON CONFLICT (name) DO NOTHING",
        )
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE name = ?")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Category::try_from(row)
    }
}
