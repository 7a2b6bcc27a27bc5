use crate::domain::category::value_objects::{CategoryId, CategoryName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}
