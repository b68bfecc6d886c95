use diesel::prelude::*;

/// Insertable row for the `category_items` join table.
///
/// The composite primary key guarantees a (category, item) pair appears at
/// most once.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::schema::category_items)]
pub struct NewCategoryItem {
    pub category_id: i32,
    pub item_id: i32,
}
