use serde::Deserialize;
use validator::Validate;

use crate::domain::types::CategoryId;
use crate::forms::{FormError, parse_id_list};

/// Body of `POST`/`DELETE /item/{item_id}/categories`.
#[derive(Debug, Deserialize)]
pub struct ItemCategoriesForm {
    pub categories: Vec<i32>,
}

/// Typed counterpart of [`ItemCategoriesForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCategoriesPayload {
    pub categories: Vec<CategoryId>,
}

impl From<ItemCategoriesForm> for ItemCategoriesPayload {
    fn from(value: ItemCategoriesForm) -> Self {
        Self {
            categories: value
                .categories
                .into_iter()
                .filter_map(|id| CategoryId::new(id).ok())
                .collect(),
        }
    }
}

/// Query string of `GET /item`, e.g. `?categories=1,2`.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub categories: Option<String>,
}

impl ListItemsQuery {
    /// Returns the category filter, or `None` when the parameter is absent
    /// or empty (unfiltered listing).
    pub fn into_filter(self) -> Result<Option<Vec<CategoryId>>, FormError> {
        let raw = match self.categories {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };
        let ids = parse_id_list(&raw)?
            .into_iter()
            .filter_map(|id| CategoryId::new(id).ok())
            .collect();
        Ok(Some(ids))
    }
}

/// Query string of `GET /item/random`.
#[derive(Debug, Deserialize)]
pub struct RandomPickQuery {
    pub categories: Option<String>,
}

#[derive(Debug, Validate)]
struct RandomPickValidator {
    #[validate(length(min = 1))]
    categories: Vec<i32>,
}

/// Typed counterpart of [`RandomPickQuery`] with the non-empty requirement
/// already enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPickPayload {
    pub categories: Vec<CategoryId>,
}

impl TryFrom<RandomPickQuery> for RandomPickPayload {
    type Error = FormError;

    fn try_from(value: RandomPickQuery) -> Result<Self, Self::Error> {
        let ids = parse_id_list(value.categories.as_deref().unwrap_or(""))?;

        let validator = RandomPickValidator { categories: ids };
        validator
            .validate()
            .map_err(|_| FormError::MissingCategories)?;

        Ok(Self {
            categories: validator
                .categories
                .into_iter()
                .filter_map(|id| CategoryId::new(id).ok())
                .collect(),
        })
    }
}
