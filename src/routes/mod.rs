use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod items;

/// JSON envelope returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 200 envelope with an optional payload.
pub fn ok_response<T: Serialize>(message: String, data: Option<T>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        success: true,
        message,
        data,
    })
}

/// 201 envelope carrying the created record.
pub fn created_response<T: Serialize>(message: String, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse {
        success: true,
        message,
        data: Some(data),
    })
}

/// Maps a service failure onto the envelope and its status code.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ApiResponse::<()> {
        success: false,
        message: err.to_string(),
        data: None,
    };

    match err {
        ServiceError::Validation(_) => HttpResponse::BadRequest().json(body),
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::Upload(_) | ServiceError::Repository(_) => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Plain 404 envelope, used when a path id cannot name an existing row.
pub fn not_found_response(message: &str) -> HttpResponse {
    error_response(&ServiceError::NotFound(message.to_string()))
}

/// Registers every API route. Shared between `main` and the HTTP tests;
/// the `/uploads` static mount is added separately by the binary.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::list_categories)
        .service(categories::create_category)
        .service(categories::delete_category)
        .service(categories::add_category_to_items)
        .service(categories::remove_category_from_items)
        .service(categories::set_favorite_item)
        .service(items::random_item)
        .service(items::list_items)
        .service(items::create_item)
        .service(items::delete_item)
        .service(items::item_categories)
        .service(items::add_item_to_categories)
        .service(items::remove_item_from_categories);
}
