use serde::Deserialize;

use crate::domain::category::NewCategory;
use crate::domain::types::ItemId;

/// Body of `POST /category`.
///
/// The name is persisted as-is: no uniqueness or emptiness checks.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryForm {
    pub name: String,
}

impl CreateCategoryForm {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory::new(self.name)
    }
}

/// Body of `POST`/`DELETE /category/{category_id}/items`.
#[derive(Debug, Deserialize)]
pub struct CategoryItemsForm {
    pub items: Vec<i32>,
}

/// Typed counterpart of [`CategoryItemsForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryItemsPayload {
    pub items: Vec<ItemId>,
}

impl From<CategoryItemsForm> for CategoryItemsPayload {
    fn from(value: CategoryItemsForm) -> Self {
        // Ids that cannot exist are dropped here the same way ids missing
        // from the store are dropped by the lookup.
        Self {
            items: value
                .items
                .into_iter()
                .filter_map(|id| ItemId::new(id).ok())
                .collect(),
        }
    }
}
