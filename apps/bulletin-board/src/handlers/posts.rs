//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use kiosk_core::domain::Post;
use kiosk_shared::MessageBody;
use kiosk_shared::dto::CreatePostRequest;

use crate::middleware::error::{ApiError, ApiResult};
use crate::middleware::identity::Identity;
use crate::state::AppState;

/// GET /api/posts - the full collection, newest first.
pub async fn list_posts(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let posts = state
        .posts
        .load()
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to load posts: {e}")))?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts - create a post authored by the acting user.
///
/// The body is read raw so malformed JSON maps to the widget's own 400
/// payload instead of the framework default.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let payload: CreatePostRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_string()))?;

    let content = payload.content.as_deref().unwrap_or("");
    if content.trim().is_empty() {
        return Err(ApiError::BadRequest("Post content is required".to_string()));
    }

    let post = Post::new(
        identity.user,
        payload.title.as_deref().unwrap_or(""),
        content,
    );

    let mut posts = state.posts.load_or_default().await;
    posts.insert(0, post.clone());
    state
        .posts
        .save(&posts)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to create post: {e}")))?;

    Ok(HttpResponse::Created().json(post))
}

/// DELETE /api/posts/{id} - authors may remove their own posts.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    let mut posts = state.posts.load_or_default().await;
    let post = posts
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    if post.author != identity.user {
        return Err(ApiError::Forbidden(
            "You can only delete your own posts".to_string(),
        ));
    }

    posts.retain(|p| p.id != id);
    state
        .posts
        .save(&posts)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to delete post: {e}")))?;

    Ok(HttpResponse::Ok().json(MessageBody::new("Post deleted successfully")))
}

// ── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;
    use tempfile::TempDir;

    use kiosk_infra::JsonFilePostStore;

    use crate::middleware::identity::FORWARDED_USER_HEADER;

    fn state_for(tmp: &TempDir) -> AppState {
        AppState {
            posts: Arc::new(JsonFilePostStore::new(tmp.path().join("bulletin_board"))),
        }
    }

    async fn call(state: &AppState, req: test::TestRequest) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(crate::handlers::configure_routes),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    async fn create(state: &AppState, user: &str, body: serde_json::Value) -> ServiceResponse {
        call(
            state,
            test::TestRequest::post()
                .uri("/api/posts")
                .insert_header((FORWARDED_USER_HEADER, user))
                .set_json(body),
        )
        .await
    }

    async fn listed(state: &AppState) -> Vec<Post> {
        let resp = call(state, test::TestRequest::get().uri("/api/posts")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn rejects_a_body_that_is_not_json() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let resp = call(
            &state,
            test::TestRequest::post()
                .uri("/api/posts")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid JSON payload");
    }

    #[actix_web::test]
    async fn rejects_blank_content_without_touching_the_collection() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        for body in [json!({}), json!({"content": "   "}), json!({"title": "t"})] {
            let resp = create(&state, "alice", body).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Post content is required");
        }

        assert!(listed(&state).await.is_empty());
    }

    #[actix_web::test]
    async fn creates_a_post_and_prepends_it() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let resp = create(
            &state,
            "alice",
            json!({"title": "  Greetings  ", "content": "  hello  "}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let post: Post = test::read_body_json(resp).await;
        assert_eq!(post.author, "alice");
        assert_eq!(post.title, "Greetings");
        assert_eq!(post.content, "hello");

        let resp = create(&state, "alice", json!({"content": "second"})).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let posts = listed(&state).await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "second");
        assert_eq!(posts[1].id, post.id);
    }

    #[actix_web::test]
    async fn created_ids_are_well_formed_and_unique() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let mut ids = std::collections::HashSet::new();
        for i in 0..5 {
            let resp = create(&state, "alice", json!({"content": format!("post {i}")})).await;
            let post: Post = test::read_body_json(resp).await;

            let (ts, hex) = post.id.split_once('-').expect("id must contain a dash");
            assert_eq!(ts.parse::<i64>().unwrap(), post.timestamp);
            assert_eq!(hex.len(), 8);
            assert!(
                hex.chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
            );
            ids.insert(post.id);
        }
        assert_eq!(ids.len(), 5);
    }

    #[actix_web::test]
    async fn long_titles_are_truncated() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let resp = create(
            &state,
            "alice",
            json!({"title": "x".repeat(300), "content": "hello"}),
        )
        .await;
        let post: Post = test::read_body_json(resp).await;
        assert_eq!(post.title.chars().count(), 200);
    }

    #[actix_web::test]
    async fn missing_header_posts_as_anonymous() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let resp = call(
            &state,
            test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({"content": "hello"})),
        )
        .await;
        let post: Post = test::read_body_json(resp).await;
        assert_eq!(post.author, "Anonymous");
    }

    #[actix_web::test]
    async fn deleting_an_unknown_id_is_404() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let resp = call(
            &state,
            test::TestRequest::delete()
                .uri("/api/posts/1700000000-deadbeef")
                .insert_header((FORWARDED_USER_HEADER, "alice")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Post not found");
    }

    #[actix_web::test]
    async fn only_the_author_may_delete() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let resp = create(&state, "alice", json!({"content": "hello"})).await;
        let post: Post = test::read_body_json(resp).await;

        let resp = call(
            &state,
            test::TestRequest::delete()
                .uri(&format!("/api/posts/{}", post.id))
                .insert_header((FORWARDED_USER_HEADER, "bob")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "You can only delete your own posts");
        assert_eq!(listed(&state).await.len(), 1);
    }

    #[actix_web::test]
    async fn authors_delete_their_own_posts() {
        let tmp = TempDir::new().unwrap();
        let state = state_for(&tmp);

        let resp = create(&state, "alice", json!({"content": "hello"})).await;
        let post: Post = test::read_body_json(resp).await;

        let resp = call(
            &state,
            test::TestRequest::delete()
                .uri(&format!("/api/posts/{}", post.id))
                .insert_header((FORWARDED_USER_HEADER, "alice")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post deleted successfully");
        assert!(listed(&state).await.is_empty());
    }
}
