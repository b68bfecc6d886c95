use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ItemId};

/// Canonical category record.
///
/// `favorite_item`, when set, points at an existing item; the pointer is
/// cleared when that item is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub favorite_item: Option<ItemId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Builds a new category with the given name and current timestamps.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
