use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::item::Item;
use crate::domain::types::{CategoryId, ItemId};
use crate::models::association::NewCategoryItem;
use crate::models::category::Category as DbCategory;
use crate::models::item::Item as DbItem;
use crate::repository::{AssociationReader, AssociationWriter, DieselRepository, RepositoryResult};

impl AssociationReader for DieselRepository {
    fn list_items_for_categories(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<Item>> {
        use crate::schema::{category_items, items};

        let mut conn = self.conn()?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();

        // The IN-subselect deduplicates items associated through several of
        // the given categories.
        let items = items::table
            .filter(
                items::id.eq_any(
                    category_items::table
                        .filter(category_items::category_id.eq_any(raw_ids))
                        .select(category_items::item_id),
                ),
            )
            .order(items::id.asc())
            .load::<DbItem>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Item>, _>>()?;

        Ok(items)
    }

    fn list_categories_for_item(&self, id: ItemId) -> RepositoryResult<Vec<Category>> {
        use crate::schema::{categories, category_items};

        let mut conn = self.conn()?;

        let categories = categories::table
            .filter(
                categories::id.eq_any(
                    category_items::table
                        .filter(category_items::item_id.eq(id.get()))
                        .select(category_items::category_id),
                ),
            )
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(categories)
    }
}

impl AssociationWriter for DieselRepository {
    fn add_associations(&self, pairs: &[(CategoryId, ItemId)]) -> RepositoryResult<usize> {
        use crate::schema::category_items;

        let mut conn = self.conn()?;

        let rows: Vec<NewCategoryItem> = pairs
            .iter()
            .map(|(category_id, item_id)| NewCategoryItem {
                category_id: category_id.get(),
                item_id: item_id.get(),
            })
            .collect();

        // One transaction: either every pair lands or none does.
        let affected = conn.transaction(|conn| {
            diesel::insert_or_ignore_into(category_items::table)
                .values(&rows)
                .execute(conn)
        })?;

        Ok(affected)
    }

    fn remove_associations(&self, pairs: &[(CategoryId, ItemId)]) -> RepositoryResult<usize> {
        use crate::schema::category_items;

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            let mut affected = 0;
            for (category_id, item_id) in pairs {
                affected += diesel::delete(
                    category_items::table
                        .filter(category_items::category_id.eq(category_id.get()))
                        .filter(category_items::item_id.eq(item_id.get())),
                )
                .execute(conn)?;
            }
            Ok::<usize, diesel::result::Error>(affected)
        })?;

        Ok(affected)
    }
}
