use rand::seq::SliceRandom;

use crate::domain::item::NewItem;
use crate::domain::types::{CategoryId, ItemId};
use crate::dto::categories::CategoryDto;
use crate::dto::items::ItemDto;
use crate::forms::items::{ItemCategoriesPayload, RandomPickPayload};
use crate::repository::{
    AssociationReader, AssociationWriter, CategoryReader, ItemReader, ItemWriter,
};

use super::{ServiceError, ServiceResult};

/// Lists items, optionally restricted to members of the given categories.
///
/// The filtered listing is deduplicated by item identity even when an item
/// belongs to several of the requested categories.
pub fn list_items<R>(filter: Option<Vec<CategoryId>>, repo: &R) -> ServiceResult<Vec<ItemDto>>
where
    R: ItemReader + AssociationReader,
{
    let result = match filter {
        None => repo.list_items(),
        Some(ids) => repo.list_items_for_categories(&ids),
    };

    match result {
        Ok(items) => Ok(items.into_iter().map(ItemDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list items: {e}");
            Err(e.into())
        }
    }
}

/// Records a new item; persisting the uploaded file is the caller's
/// responsibility, this only stores the resulting public path.
pub fn create_item<R>(image_path: Option<String>, repo: &R) -> ServiceResult<ItemDto>
where
    R: ItemWriter,
{
    match repo.create_item(&NewItem::new(image_path)) {
        Ok(item) => Ok(ItemDto::from(item)),
        Err(e) => {
            log::error!("Failed to create item: {e}");
            Err(e.into())
        }
    }
}

pub fn delete_item<R>(item_id: ItemId, repo: &R) -> ServiceResult<()>
where
    R: ItemWriter,
{
    match repo.delete_item(item_id) {
        Ok(0) => Err(ServiceError::NotFound("Item not found".into())),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete item: {e}");
            Err(e.into())
        }
    }
}

/// Categories the given item belongs to.
///
/// A missing item and an item without categories are distinct outcomes: the
/// former is NotFound, the latter an empty success.
pub fn item_categories<R>(item_id: ItemId, repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: ItemReader + AssociationReader,
{
    match repo.get_item_by_id(item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound("Item not found".into())),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(e.into());
        }
    }

    match repo.list_categories_for_item(item_id) {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories for item: {e}");
            Err(e.into())
        }
    }
}

/// Associates an item with every category in the payload that exists.
pub fn add_item_to_categories<R>(
    item_id: ItemId,
    payload: ItemCategoriesPayload,
    repo: &R,
) -> ServiceResult<usize>
where
    R: ItemReader + CategoryReader + AssociationWriter,
{
    let pairs = match_item_and_categories(item_id, &payload, repo)?;

    match repo.add_associations(&pairs) {
        Ok(_) => Ok(pairs.len()),
        Err(e) => {
            log::error!("Failed to add item to categories: {e}");
            Err(e.into())
        }
    }
}

/// Mirror of [`add_item_to_categories`], single removal pass.
pub fn remove_item_from_categories<R>(
    item_id: ItemId,
    payload: ItemCategoriesPayload,
    repo: &R,
) -> ServiceResult<usize>
where
    R: ItemReader + CategoryReader + AssociationWriter,
{
    let pairs = match_item_and_categories(item_id, &payload, repo)?;

    match repo.remove_associations(&pairs) {
        Ok(_) => Ok(pairs.len()),
        Err(e) => {
            log::error!("Failed to remove item from categories: {e}");
            Err(e.into())
        }
    }
}

/// Picks one item uniformly at random from the members of the given
/// categories.
///
/// The categories list is validated as non-empty before any store access.
pub fn random_item<R>(payload: RandomPickPayload, repo: &R) -> ServiceResult<ItemDto>
where
    R: AssociationReader,
{
    if payload.categories.is_empty() {
        return Err(ServiceError::Validation(
            "Categories are required to fetch a random item".into(),
        ));
    }

    let items = match repo.list_items_for_categories(&payload.categories) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to load items for random pick: {e}");
            return Err(e.into());
        }
    };

    // Uniform over the distinct-item result set, not weighted by how many
    // of the categories an item belongs to.
    match items.choose(&mut rand::thread_rng()) {
        Some(item) => Ok(ItemDto::from(item.clone())),
        None => Err(ServiceError::NotFound(
            "No items found for the given categories".into(),
        )),
    }
}

fn match_item_and_categories<R>(
    item_id: ItemId,
    payload: &ItemCategoriesPayload,
    repo: &R,
) -> ServiceResult<Vec<(CategoryId, ItemId)>>
where
    R: ItemReader + CategoryReader,
{
    match repo.get_item_by_id(item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound("Item not found".into())),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(e.into());
        }
    }

    let categories = match repo.list_categories_by_ids(&payload.categories) {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to load categories: {e}");
            return Err(e.into());
        }
    };

    if categories.is_empty() {
        return Err(ServiceError::NotFound("Categories not found".into()));
    }

    Ok(categories
        .into_iter()
        .map(|category| (category.id, item_id))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::repository::test::TestRepository;

    fn cid(id: i32) -> CategoryId {
        CategoryId::new(id).unwrap()
    }

    fn iid(id: i32) -> ItemId {
        ItemId::new(id).unwrap()
    }

    #[test]
    fn unfiltered_listing_returns_all_items() {
        let repo =
            TestRepository::new().with_items(vec![TestRepository::item(1), TestRepository::item(2)]);

        let items = list_items(None, &repo).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn filtered_listing_deduplicates_across_categories() {
        let repo = TestRepository::new()
            .with_categories(vec![
                TestRepository::category(1, "Shirts"),
                TestRepository::category(2, "Formal"),
            ])
            .with_items(vec![TestRepository::item(1)])
            .with_associations(vec![(cid(1), iid(1)), (cid(2), iid(1))]);

        let items = list_items(Some(vec![cid(1), cid(2)]), &repo).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_id, 1);
    }

    #[test]
    fn missing_item_and_empty_categories_are_distinct() {
        let repo = TestRepository::new().with_items(vec![TestRepository::item(1)]);

        let err = item_categories(iid(9), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let categories = item_categories(iid(1), &repo).unwrap();
        assert!(categories.is_empty());
    }

    #[test]
    fn deleting_item_clears_favorite_pointers() {
        let repo = TestRepository::new()
            .with_categories(vec![TestRepository::category(1, "Scarves")])
            .with_items(vec![TestRepository::item(1)]);
        crate::services::categories::set_favorite_item(cid(1), iid(1), &repo).unwrap();

        delete_item(iid(1), &repo).unwrap();

        let categories = crate::services::categories::list_categories(&repo).unwrap();
        assert_eq!(categories[0].favorite_item, None);
    }

    #[test]
    fn random_pick_requires_categories_before_any_query() {
        let repo = TestRepository::new();
        let payload = RandomPickPayload { categories: vec![] };

        let err = random_item(payload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn random_pick_with_no_members_is_not_found() {
        let repo = TestRepository::new().with_categories(vec![TestRepository::category(1, "Ties")]);
        let payload = RandomPickPayload {
            categories: vec![cid(1)],
        };

        let err = random_item(payload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn random_pick_covers_all_members_over_many_trials() {
        let repo = TestRepository::new()
            .with_categories(vec![
                TestRepository::category(1, "Shoes"),
                TestRepository::category(2, "Boots"),
            ])
            .with_items(vec![TestRepository::item(1), TestRepository::item(2)])
            .with_associations(vec![(cid(1), iid(1)), (cid(2), iid(2))]);

        let mut seen = BTreeSet::new();
        for _ in 0..100 {
            let payload = RandomPickPayload {
                categories: vec![cid(1), cid(2)],
            };
            seen.insert(random_item(payload, &repo).unwrap().item_id);
        }
        assert_eq!(seen, BTreeSet::from([1, 2]));
    }

    #[test]
    fn add_item_to_categories_reports_matched_count() {
        let repo = TestRepository::new()
            .with_categories(vec![TestRepository::category(1, "Shirts")])
            .with_items(vec![TestRepository::item(1)]);
        let payload = ItemCategoriesPayload {
            categories: vec![cid(1), cid(44)],
        };

        let matched = add_item_to_categories(iid(1), payload, &repo).unwrap();
        assert_eq!(matched, 1);

        let categories = item_categories(iid(1), &repo).unwrap();
        assert_eq!(categories.len(), 1);
    }
}
