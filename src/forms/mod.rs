pub mod categories;
pub mod items;

use thiserror::Error;

/// Errors produced while turning raw request input into typed payloads.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("categories must be a comma-separated list of ids")]
    InvalidIdList,
    #[error("Categories are required to fetch a random item")]
    MissingCategories,
}

/// Parses a comma-separated id list such as `"1,2,3"`.
///
/// Whitespace around entries is ignored; non-numeric entries fail the whole
/// list. Non-positive ids are dropped silently, matching the treatment of
/// ids that do not exist in the store.
pub(crate) fn parse_id_list(raw: &str) -> Result<Vec<i32>, FormError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<i32>().map_err(|_| FormError::InvalidIdList))
        .collect()
}
