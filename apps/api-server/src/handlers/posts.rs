//! Handlers for the `/posts` collection.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use quill_core::domain::{Draft, PostId};
use quill_core::error::DomainError;
use quill_shared::{ErrorBody, MessageBody, PostEnvelope, PostInput, PostListResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Decode and validate a `{title, content}` body, trimming both fields.
///
/// A missing, non-object or empty body is "No data provided".
fn parse_input(body: &[u8]) -> AppResult<PostInput> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Value::Object(map),
        _ => return Err(AppError::BadRequest(ErrorBody::no_data().error)),
    };

    let input: PostInput =
        serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let draft = Draft::new(input.title.trim(), input.content.trim());
    draft.validate()?;

    Ok(draft.to_input())
}

fn not_found(id: PostId) -> AppError {
    DomainError::NotFound { id }.into()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(PostListResponse::wrapped(posts)))
}

/// POST /posts
pub async fn create_post(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let input = parse_input(&body)?;

    let post = state.posts.insert(input.title, input.content).await?;
    tracing::info!(id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(PostEnvelope::with_message(post, "Post created")))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = PostId(path.into_inner());

    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(PostEnvelope::new(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = PostId(path.into_inner());

    // Unknown ids are reported before the body is looked at.
    if state.posts.find_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }
    let input = parse_input(&body)?;

    let post = state
        .posts
        .update(id, input.title, input.content)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = %id, "Post updated");

    Ok(HttpResponse::Ok().json(PostEnvelope::with_message(post, "Post updated")))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = PostId(path.into_inner());

    if !state.posts.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id = %id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageBody::new(format!("Post {} deleted successfully", id))))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new(AppState::in_memory()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": "  T  ", "content": "C" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post created");
        assert_eq!(body["post"]["id"], 1);
        assert_eq!(body["post"]["title"], "T");
        assert_eq!(body["post"]["content"], "C");

        let req = test::TestRequest::get().uri("/posts").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["posts"].as_array().unwrap().len(), 1);
        assert_eq!(body["posts"][0]["title"], "T");
    }

    #[actix_web::test]
    async fn test_create_validation_messages() {
        let app = app!();

        let cases = [
            (json!({}), "No data provided"),
            (json!({ "content": "C" }), "Title is required"),
            (json!({ "title": "T", "content": "   " }), "Content is required"),
        ];
        for (payload, expected) in cases {
            let req = test::TestRequest::post()
                .uri("/posts")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], expected);
        }

        let req = test::TestRequest::post().uri("/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_and_get() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": "T", "content": "C" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/posts/1")
            .set_json(json!({ "title": "T2", "content": "C2" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Post updated");
        assert_eq!(body["post"]["title"], "T2");

        let req = test::TestRequest::get().uri("/posts/1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["post"]["content"], "C2");
    }

    #[actix_web::test]
    async fn test_unknown_ids_are_404() {
        let app = app!();

        for req in [
            test::TestRequest::get().uri("/posts/9").to_request(),
            test::TestRequest::delete().uri("/posts/9").to_request(),
            test::TestRequest::put()
                .uri("/posts/9")
                .set_json(json!({ "title": "T", "content": "C" }))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Post with id 9 not found");
        }

        let req = test::TestRequest::get().uri("/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_then_ids_keep_growing() {
        let app = app!();
        for title in ["a", "b"] {
            let req = test::TestRequest::post()
                .uri("/posts")
                .set_json(json!({ "title": title, "content": "x" }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::delete().uri("/posts/2").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Post 2 deleted successfully");

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": "c", "content": "x" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["post"]["id"], 3);
    }

    #[actix_web::test]
    async fn test_index_and_fallbacks() {
        let app = app!();

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Welcome to the Blog API");
        assert!(body["endpoints"]["POST /posts"].is_string());

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::patch().uri("/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Method not allowed");
    }
}
