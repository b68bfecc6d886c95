use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ItemId;

/// Canonical item record, optionally backed by an uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Public serving path of the uploaded image, e.g. `/uploads/<file>`.
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewItem {
    /// Builds a new item with the given image path and current timestamps.
    pub fn new(image_path: Option<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            image_path,
            created_at: now,
            updated_at: now,
        }
    }
}
