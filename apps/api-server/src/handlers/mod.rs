//! HTTP handlers and route configuration.

mod index;
mod posts;

use actix_web::{HttpResponse, error::InternalError, web};
use quill_shared::ErrorBody;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        // Non-integer ids do not name a resource.
        InternalError::from_response(err, HttpResponse::NotFound().json(ErrorBody::not_found()))
            .into()
    }))
    .route("/", web::get().to(index::index))
    .service(
        web::resource("/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post))
            .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::not_found())
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}
