use actix_web::{Responder, delete, get, post, put, web};

use crate::domain::types::{CategoryId, ItemId};
use crate::forms::categories::{CategoryItemsForm, CategoryItemsPayload, CreateCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::{created_response, error_response, not_found_response, ok_response};
use crate::services::categories::{
    add_category_to_items as add_category_to_items_service,
    create_category as create_category_service, delete_category as delete_category_service,
    list_categories as list_categories_service,
    remove_category_from_items as remove_category_from_items_service,
    set_favorite_item as set_favorite_item_service,
};

#[get("/category")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => {
            let message = format!("Retrieved {} Categories", categories.len());
            ok_response(message, Some(categories))
        }
        Err(err) => error_response(&err),
    }
}

#[post("/category")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCategoryForm>,
) -> impl Responder {
    match create_category_service(form, repo.get_ref()) {
        Ok(category) => {
            let message = format!(
                "Category with name: {} successfully created",
                category.name
            );
            created_response(message, category)
        }
        Err(err) => error_response(&err),
    }
}

#[delete("/category/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(category_id.into_inner()) else {
        return not_found_response("Category not found");
    };

    match delete_category_service(category_id, repo.get_ref()) {
        Ok(()) => ok_response::<()>("Category successfully deleted".to_string(), None),
        Err(err) => error_response(&err),
    }
}

#[post("/category/{category_id}/items")]
pub async fn add_category_to_items(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryItemsForm>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(category_id.into_inner()) else {
        return not_found_response("Category not found");
    };
    let payload: CategoryItemsPayload = form.into();

    match add_category_to_items_service(category_id, payload, repo.get_ref()) {
        Ok(matched) => ok_response::<()>(
            format!("Category successfully added to {matched} Items"),
            None,
        ),
        Err(err) => error_response(&err),
    }
}

#[delete("/category/{category_id}/items")]
pub async fn remove_category_from_items(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryItemsForm>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(category_id.into_inner()) else {
        return not_found_response("Category not found");
    };
    let payload: CategoryItemsPayload = form.into();

    match remove_category_from_items_service(category_id, payload, repo.get_ref()) {
        Ok(matched) => ok_response::<()>(
            format!("Category successfully deleted from {matched} Items"),
            None,
        ),
        Err(err) => error_response(&err),
    }
}

#[put("/category/{category_id}/favorite/{item_id}")]
pub async fn set_favorite_item(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (category_id, item_id) = path.into_inner();
    let Ok(category_id) = CategoryId::new(category_id) else {
        return not_found_response("Category not found");
    };
    let Ok(item_id) = ItemId::new(item_id) else {
        return not_found_response("Item not found");
    };

    match set_favorite_item_service(category_id, item_id, repo.get_ref()) {
        Ok(()) => ok_response::<()>(format!("Selected favorite item for {category_id}"), None),
        Err(err) => error_response(&err),
    }
}
