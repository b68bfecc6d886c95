use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{Item as DomainItem, NewItem as DomainNewItem};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `items` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::items)]
pub struct Item {
    pub id: i32,
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Item`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::items)]
pub struct NewItem {
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Item> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            image_path: item.image_path,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}

impl From<DomainNewItem> for NewItem {
    fn from(item: DomainNewItem) -> Self {
        Self {
            image_path: item.image_path,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
