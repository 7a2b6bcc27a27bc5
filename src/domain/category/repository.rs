use crate::domain::category::entity::Category;
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Categories form a reference table: they are read by the article workflow
/// and only ever written when seeding.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
    /// Returns the category with this name, inserting it first if missing.
    async fn ensure(&self, name: CategoryName) -> DomainResult<Category>;
}
