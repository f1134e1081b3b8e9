//! API index.

use actix_web::HttpResponse;
use quill_shared::ApiIndex;

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiIndex::default())
}
