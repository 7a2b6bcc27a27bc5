use crate::domain::category::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
        }
    }
}
