use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_web::{Responder, delete, get, post, web};

use crate::domain::types::ItemId;
use crate::forms::items::{
    ItemCategoriesForm, ItemCategoriesPayload, ListItemsQuery, RandomPickPayload, RandomPickQuery,
};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{created_response, error_response, not_found_response, ok_response};
use crate::services::items::{
    add_item_to_categories as add_item_to_categories_service, create_item as create_item_service,
    delete_item as delete_item_service, item_categories as item_categories_service,
    list_items as list_items_service, random_item as random_item_service,
    remove_item_from_categories as remove_item_from_categories_service,
};
use crate::services::uploads::store_upload;
use crate::services::{ServiceError, ServiceResult};

/// Multipart body of `POST /item`; the image field is optional.
#[derive(MultipartForm)]
pub struct UploadItemForm {
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

#[get("/item")]
pub async fn list_items(
    query: web::Query<ListItemsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let filter = match query.into_inner().into_filter() {
        Ok(filter) => filter,
        Err(err) => return error_response(&err.into()),
    };
    let filtered = filter.is_some();

    match list_items_service(filter, repo.get_ref()) {
        Ok(items) => {
            let message = if filtered {
                format!("Retrieved {} Filtered Items", items.len())
            } else {
                format!("Retrieved {} Items", items.len())
            };
            ok_response(message, Some(items))
        }
        Err(err) => error_response(&err),
    }
}

#[get("/item/random")]
pub async fn random_item(
    query: web::Query<RandomPickQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: RandomPickPayload = match query.into_inner().try_into() {
        Ok(payload) => payload,
        Err(err) => return error_response(&err.into()),
    };

    match random_item_service(payload, repo.get_ref()) {
        Ok(item) => ok_response("Random item retrieved successfully".to_string(), Some(item)),
        Err(err) => error_response(&err),
    }
}

#[post("/item")]
pub async fn create_item(
    MultipartForm(form): MultipartForm<UploadItemForm>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let image_path = match persist_image(form.image, &config.uploads_dir) {
        Ok(image_path) => image_path,
        Err(err) => return error_response(&err),
    };

    match create_item_service(image_path, repo.get_ref()) {
        Ok(item) => created_response("Item successfully created".to_string(), item),
        Err(err) => error_response(&err),
    }
}

fn persist_image(image: Option<TempFile>, uploads_dir: &str) -> ServiceResult<Option<String>> {
    match image {
        Some(file) => match store_upload(file, uploads_dir) {
            Ok(path) => Ok(Some(path)),
            Err(e) => {
                log::error!("Failed to store uploaded image: {e}");
                Err(ServiceError::Upload(e.to_string()))
            }
        },
        None => Ok(None),
    }
}

#[delete("/item/{item_id}")]
pub async fn delete_item(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(item_id) = ItemId::new(item_id.into_inner()) else {
        return not_found_response("Item not found");
    };

    match delete_item_service(item_id, repo.get_ref()) {
        Ok(()) => ok_response::<()>("Item successfully deleted".to_string(), None),
        Err(err) => error_response(&err),
    }
}

#[get("/item/{item_id}/categories")]
pub async fn item_categories(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(item_id) = ItemId::new(item_id.into_inner()) else {
        return not_found_response("Item not found");
    };

    match item_categories_service(item_id, repo.get_ref()) {
        Ok(categories) => {
            let message = format!("Retrieved {} Categories for Item", categories.len());
            ok_response(message, Some(categories))
        }
        Err(err) => error_response(&err),
    }
}

#[post("/item/{item_id}/categories")]
pub async fn add_item_to_categories(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ItemCategoriesForm>,
) -> impl Responder {
    let Ok(item_id) = ItemId::new(item_id.into_inner()) else {
        return not_found_response("Item not found");
    };
    let payload: ItemCategoriesPayload = form.into();

    match add_item_to_categories_service(item_id, payload, repo.get_ref()) {
        Ok(matched) => ok_response::<()>(
            format!("Item successfully added to {matched} Categories"),
            None,
        ),
        Err(err) => error_response(&err),
    }
}

#[delete("/item/{item_id}/categories")]
pub async fn remove_item_from_categories(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ItemCategoriesForm>,
) -> impl Responder {
    let Ok(item_id) = ItemId::new(item_id.into_inner()) else {
        return not_found_response("Item not found");
    };
    let payload: ItemCategoriesPayload = form.into();

    match remove_item_from_categories_service(item_id, payload, repo.get_ref()) {
        Ok(matched) => ok_response::<()>(
            format!("Item successfully deleted from {matched} Categories"),
            None,
        ),
        Err(err) => error_response(&err),
    }
}
