use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{ItemId, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub favorite_item: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: category.name,
            favorite_item: category.favorite_item.map(ItemId::new).transpose()?,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
