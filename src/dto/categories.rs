use serde::Serialize;

use crate::domain::category::Category;

/// Wire representation of a category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category_id: i32,
    pub name: String,
    pub favorite_item: Option<i32>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            category_id: value.id.get(),
            name: value.name,
            favorite_item: value.favorite_item.map(|id| id.get()),
        }
    }
}
