use wardrobe_api::domain::category::NewCategory;
use wardrobe_api::domain::item::NewItem;
use wardrobe_api::domain::types::{CategoryId, ItemId};
use wardrobe_api::repository::{
    AssociationReader, AssociationWriter, CategoryReader, CategoryWriter, DieselRepository,
    ItemReader, ItemWriter,
};

mod common;

fn repo() -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new();
    let repository = DieselRepository::new(test_db.pool());
    (test_db, repository)
}

#[test]
fn create_category_returns_record_without_favorite() {
    let (_db, repo) = repo();

    let created = repo
        .create_category(&NewCategory::new("Jackets"))
        .expect("should create category");
    assert_eq!(created.name, "Jackets");
    assert_eq!(created.favorite_item, None);

    let categories = repo.list_categories().expect("should list categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, created.id);
}

#[test]
fn category_name_is_persisted_as_is() {
    let (_db, repo) = repo();

    let created = repo
        .create_category(&NewCategory::new("  "))
        .expect("unvalidated names are accepted");
    assert_eq!(created.name, "  ");
}

#[test]
fn delete_category_reports_affected_rows() {
    let (_db, repo) = repo();

    let created = repo
        .create_category(&NewCategory::new("Hats"))
        .expect("should create category");

    assert_eq!(repo.delete_category(created.id).unwrap(), 1);
    assert_eq!(repo.delete_category(created.id).unwrap(), 0);
    assert!(repo.list_categories().unwrap().is_empty());
}

#[test]
fn associations_link_and_unlink_pairs() {
    let (_db, repo) = repo();

    let category = repo.create_category(&NewCategory::new("Shoes")).unwrap();
    let item = repo.create_item(&NewItem::new(None)).unwrap();

    repo.add_associations(&[(category.id, item.id)]).unwrap();
    let items = repo.list_items_for_categories(&[category.id]).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item.id);

    // Re-adding the same pair is ignored, not an error.
    repo.add_associations(&[(category.id, item.id)]).unwrap();
    assert_eq!(repo.list_items_for_categories(&[category.id]).unwrap().len(), 1);

    let removed = repo.remove_associations(&[(category.id, item.id)]).unwrap();
    assert_eq!(removed, 1);
    assert!(repo.list_items_for_categories(&[category.id]).unwrap().is_empty());

    // Removing an absent pair is a no-op.
    let removed = repo.remove_associations(&[(category.id, item.id)]).unwrap();
    assert_eq!(removed, 0);
}

#[test]
fn items_filtered_by_categories_are_deduplicated() {
    let (_db, repo) = repo();

    let c1 = repo.create_category(&NewCategory::new("Shirts")).unwrap();
    let c2 = repo.create_category(&NewCategory::new("Formal")).unwrap();
    let shared = repo.create_item(&NewItem::new(None)).unwrap();
    let only_c1 = repo.create_item(&NewItem::new(None)).unwrap();
    let outsider = repo.create_item(&NewItem::new(None)).unwrap();

    repo.add_associations(&[
        (c1.id, shared.id),
        (c2.id, shared.id),
        (c1.id, only_c1.id),
    ])
    .unwrap();

    let items = repo.list_items_for_categories(&[c1.id, c2.id]).unwrap();
    let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![shared.id, only_c1.id]);
    assert!(!ids.contains(&outsider.id));
}

#[test]
fn favorite_pointer_is_cleared_when_item_is_deleted() {
    let (_db, repo) = repo();

    let category = repo.create_category(&NewCategory::new("Coats")).unwrap();
    let item = repo.create_item(&NewItem::new(None)).unwrap();
    repo.add_associations(&[(category.id, item.id)]).unwrap();
    repo.set_favorite_item(category.id, item.id).unwrap();

    let reloaded = repo.get_category_by_id(category.id).unwrap().unwrap();
    assert_eq!(reloaded.favorite_item, Some(item.id));

    assert_eq!(repo.delete_item(item.id).unwrap(), 1);

    let reloaded = repo.get_category_by_id(category.id).unwrap().unwrap();
    assert_eq!(reloaded.favorite_item, None);
    assert!(repo.list_items_for_categories(&[category.id]).unwrap().is_empty());
}

#[test]
fn delete_item_reports_affected_rows() {
    let (_db, repo) = repo();

    assert_eq!(repo.delete_item(ItemId::new(42).unwrap()).unwrap(), 0);

    let item = repo
        .create_item(&NewItem::new(Some("/uploads/1-shirt.png".to_string())))
        .unwrap();
    assert_eq!(item.image_path.as_deref(), Some("/uploads/1-shirt.png"));
    assert_eq!(repo.delete_item(item.id).unwrap(), 1);
}

#[test]
fn categories_for_item_only_lists_memberships() {
    let (_db, repo) = repo();

    let c1 = repo.create_category(&NewCategory::new("Casual")).unwrap();
    let _c2 = repo.create_category(&NewCategory::new("Sport")).unwrap();
    let item = repo.create_item(&NewItem::new(None)).unwrap();
    repo.add_associations(&[(c1.id, item.id)]).unwrap();

    let categories = repo.list_categories_for_item(item.id).unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, c1.id);
}

#[test]
fn lookup_by_ids_drops_unknown_ids() {
    let (_db, repo) = repo();

    let category = repo.create_category(&NewCategory::new("Belts")).unwrap();
    let found = repo
        .list_categories_by_ids(&[category.id, CategoryId::new(999).unwrap()])
        .unwrap();
    assert_eq!(found.len(), 1);

    let item = repo.create_item(&NewItem::new(None)).unwrap();
    let found = repo
        .list_items_by_ids(&[item.id, ItemId::new(999).unwrap()])
        .unwrap();
    assert_eq!(found.len(), 1);
}
