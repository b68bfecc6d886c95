use diesel::prelude::*;

use crate::domain::item::{Item, NewItem};
use crate::domain::types::ItemId;
use crate::models::item::{Item as DbItem, NewItem as DbNewItem};
use crate::repository::{DieselRepository, ItemReader, ItemWriter, RepositoryResult};

impl ItemReader for DieselRepository {
    fn list_items(&self) -> RepositoryResult<Vec<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let items = items::table
            .order(items::id.asc())
            .load::<DbItem>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Item>, _>>()?;

        Ok(items)
    }

    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let item = items::table
            .filter(items::id.eq(id.get()))
            .first::<DbItem>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }

    fn list_items_by_ids(&self, ids: &[ItemId]) -> RepositoryResult<Vec<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();

        let items = items::table
            .filter(items::id.eq_any(raw_ids))
            .order(items::id.asc())
            .load::<DbItem>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Item>, _>>()?;

        Ok(items)
    }
}

impl ItemWriter for DieselRepository {
    fn create_item(&self, item: &NewItem) -> RepositoryResult<Item> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_item: DbNewItem = item.clone().into();

        let created = diesel::insert_into(items::table)
            .values(db_item)
            .returning(DbItem::as_returning())
            .get_result::<DbItem>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize> {
        use crate::schema::{categories, category_items, items};

        let mut conn = self.conn()?;

        // Favorite pointers and join rows must not outlive the item.
        let affected = conn.transaction(|conn| {
            diesel::update(
                categories::table.filter(categories::favorite_item.eq(Some(id.get()))),
            )
            .set(categories::favorite_item.eq(None::<i32>))
            .execute(conn)?;

            diesel::delete(category_items::table.filter(category_items::item_id.eq(id.get())))
                .execute(conn)?;

            diesel::delete(items::table.filter(items::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }
}
