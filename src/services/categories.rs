use crate::domain::types::{CategoryId, ItemId};
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{CategoryItemsPayload, CreateCategoryForm};
use crate::repository::{AssociationWriter, CategoryReader, CategoryWriter, ItemReader};

use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(e.into())
        }
    }
}

pub fn create_category<R>(form: CreateCategoryForm, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    match repo.create_category(&form.into_new_category()) {
        Ok(category) => Ok(CategoryDto::from(category)),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(e.into())
        }
    }
}

pub fn delete_category<R>(category_id: CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    match repo.delete_category(category_id) {
        Ok(0) => Err(ServiceError::NotFound("Category not found".into())),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(e.into())
        }
    }
}

/// Associates a category with every item in the payload that exists.
///
/// Returns the number of items actually matched; ids absent from the store
/// are dropped without being reported.
pub fn add_category_to_items<R>(
    category_id: CategoryId,
    payload: CategoryItemsPayload,
    repo: &R,
) -> ServiceResult<usize>
where
    R: CategoryReader + ItemReader + AssociationWriter,
{
    let pairs = match_category_and_items(category_id, &payload, repo)?;

    match repo.add_associations(&pairs) {
        Ok(_) => Ok(pairs.len()),
        Err(e) => {
            log::error!("Failed to add category to items: {e}");
            Err(e.into())
        }
    }
}

/// Mirror of [`add_category_to_items`]; removing an absent pair is a no-op.
pub fn remove_category_from_items<R>(
    category_id: CategoryId,
    payload: CategoryItemsPayload,
    repo: &R,
) -> ServiceResult<usize>
where
    R: CategoryReader + ItemReader + AssociationWriter,
{
    let pairs = match_category_and_items(category_id, &payload, repo)?;

    match repo.remove_associations(&pairs) {
        Ok(_) => Ok(pairs.len()),
        Err(e) => {
            log::error!("Failed to remove category from items: {e}");
            Err(e.into())
        }
    }
}

pub fn set_favorite_item<R>(category_id: CategoryId, item_id: ItemId, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter + ItemReader,
{
    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound("Category not found".into())),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(e.into());
        }
    }

    // Any existing item is accepted; association membership is not required.
    match repo.get_item_by_id(item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound("Item not found".into())),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(e.into());
        }
    }

    match repo.set_favorite_item(category_id, item_id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to set favorite item: {e}");
            Err(e.into())
        }
    }
}

fn match_category_and_items<R>(
    category_id: CategoryId,
    payload: &CategoryItemsPayload,
    repo: &R,
) -> ServiceResult<Vec<(CategoryId, ItemId)>>
where
    R: CategoryReader + ItemReader,
{
    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound("Category not found".into())),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(e.into());
        }
    }

    let items = match repo.list_items_by_ids(&payload.items) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to load items: {e}");
            return Err(e.into());
        }
    };

    if items.is_empty() {
        return Err(ServiceError::NotFound("Items not found".into()));
    }

    Ok(items
        .into_iter()
        .map(|item| (category_id, item.id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::AssociationReader;
    use crate::repository::test::TestRepository;

    #[test]
    fn created_category_appears_in_listing_without_favorite() {
        let repo = TestRepository::new();
        let form = CreateCategoryForm {
            name: "Jackets".to_string(),
        };

        let created = create_category(form, &repo).unwrap();
        assert_eq!(created.name, "Jackets");
        assert_eq!(created.favorite_item, None);

        let categories = list_categories(&repo).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0], created);
    }

    #[test]
    fn deleting_missing_category_is_not_found() {
        let repo = TestRepository::new();
        let err = delete_category(CategoryId::new(42).unwrap(), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn deleting_category_removes_it_from_listing() {
        let repo = TestRepository::new().with_categories(vec![TestRepository::category(1, "Hats")]);

        delete_category(CategoryId::new(1).unwrap(), &repo).unwrap();
        assert!(list_categories(&repo).unwrap().is_empty());
    }

    #[test]
    fn add_to_items_drops_unknown_ids_and_reports_matched_count() {
        let repo = TestRepository::new()
            .with_categories(vec![TestRepository::category(1, "Shoes")])
            .with_items(vec![TestRepository::item(1)]);
        let payload = CategoryItemsPayload {
            items: vec![ItemId::new(1).unwrap(), ItemId::new(99).unwrap()],
        };

        let matched = add_category_to_items(CategoryId::new(1).unwrap(), payload, &repo).unwrap();
        assert_eq!(matched, 1);

        let items = repo
            .list_items_for_categories(&[CategoryId::new(1).unwrap()])
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn add_to_items_with_no_match_is_not_found() {
        let repo = TestRepository::new().with_categories(vec![TestRepository::category(1, "Tops")]);
        let payload = CategoryItemsPayload {
            items: vec![ItemId::new(7).unwrap()],
        };

        let err = add_category_to_items(CategoryId::new(1).unwrap(), payload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn add_to_items_requires_existing_category() {
        let repo = TestRepository::new().with_items(vec![TestRepository::item(1)]);
        let payload = CategoryItemsPayload {
            items: vec![ItemId::new(1).unwrap()],
        };

        let err = add_category_to_items(CategoryId::new(5).unwrap(), payload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn removing_unassociated_pair_is_a_noop_success() {
        let repo = TestRepository::new()
            .with_categories(vec![TestRepository::category(1, "Belts")])
            .with_items(vec![TestRepository::item(1)]);
        let payload = CategoryItemsPayload {
            items: vec![ItemId::new(1).unwrap()],
        };

        let matched =
            remove_category_from_items(CategoryId::new(1).unwrap(), payload, &repo).unwrap();
        assert_eq!(matched, 1);
    }

    #[test]
    fn favorite_requires_existing_item() {
        let repo = TestRepository::new().with_categories(vec![TestRepository::category(1, "Coats")]);

        let err = set_favorite_item(
            CategoryId::new(1).unwrap(),
            ItemId::new(9).unwrap(),
            &repo,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn favorite_accepts_unassociated_item() {
        let repo = TestRepository::new()
            .with_categories(vec![TestRepository::category(1, "Coats")])
            .with_items(vec![TestRepository::item(3)]);

        set_favorite_item(CategoryId::new(1).unwrap(), ItemId::new(3).unwrap(), &repo).unwrap();

        let categories = list_categories(&repo).unwrap();
        assert_eq!(categories[0].favorite_item, Some(3));
    }
}
