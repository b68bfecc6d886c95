use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::item::{Item, NewItem};
use crate::domain::types::{CategoryId, ItemId};

pub mod association;
pub mod category;
pub mod errors;
pub mod item;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Load the categories whose ids appear in `ids`; unknown ids are
    /// silently dropped.
    fn list_categories_by_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the created record.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Delete a category, returning the number of rows removed.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
    /// Point a category's favorite at the given item, returning the number
    /// of rows updated.
    fn set_favorite_item(&self, id: CategoryId, item_id: ItemId) -> RepositoryResult<usize>;
}

/// Read-only operations for item entities.
pub trait ItemReader {
    /// List all items.
    fn list_items(&self) -> RepositoryResult<Vec<Item>>;
    /// Retrieve an item by its identifier.
    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>>;
    /// Load the items whose ids appear in `ids`; unknown ids are silently
    /// dropped.
    fn list_items_by_ids(&self, ids: &[ItemId]) -> RepositoryResult<Vec<Item>>;
}

/// Write operations for item entities.
pub trait ItemWriter {
    /// Persist a new item and return the created record.
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item>;
    /// Delete an item, returning the number of rows removed.
    ///
    /// Also clears any `favorite_item` pointer referencing the item and
    /// removes its join rows, in the same transaction.
    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize>;
}

/// Read-only operations over the category↔item join table.
pub trait AssociationReader {
    /// Items belonging to at least one of the given categories,
    /// deduplicated by item identity.
    fn list_items_for_categories(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<Item>>;
    /// Categories the given item belongs to.
    fn list_categories_for_item(&self, id: ItemId) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over the category↔item join table.
pub trait AssociationWriter {
    /// Insert the given (category, item) pairs, all-or-nothing.
    /// Already-present pairs are left untouched.
    fn add_associations(&self, pairs: &[(CategoryId, ItemId)]) -> RepositoryResult<usize>;
    /// Remove the given (category, item) pairs, all-or-nothing. Absent
    /// pairs are a no-op.
    fn remove_associations(&self, pairs: &[(CategoryId, ItemId)]) -> RepositoryResult<usize>;
}
