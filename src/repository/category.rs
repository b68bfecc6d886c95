use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, ItemId};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(categories)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn list_categories_by_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();

        let categories = categories::table
            .filter(categories::id.eq_any(raw_ids))
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(categories)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = diesel::insert_into(categories::table)
            .values(db_category)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::{categories, category_items};

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            diesel::delete(
                category_items::table.filter(category_items::category_id.eq(id.get())),
            )
            .execute(conn)?;

            diesel::delete(categories::table.filter(categories::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }

    fn set_favorite_item(&self, id: CategoryId, item_id: ItemId) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::update(categories::table.filter(categories::id.eq(id.get())))
            .set((
                categories::favorite_item.eq(Some(item_id.get())),
                categories::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
