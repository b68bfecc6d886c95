use serde::Serialize;

use crate::domain::item::Item;

/// Wire representation of an item.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub item_id: i32,
    pub image_path: Option<String>,
}

impl From<Item> for ItemDto {
    fn from(value: Item) -> Self {
        Self {
            item_id: value.id.get(),
            image_path: value.image_path,
        }
    }
}
