use crate::{
    api::{
        models::{ApiError, AppState},
        openapi::ApiDoc,
    },
    config::NotFoundPolicy,
    core::{
        models::user::{User, UserPayload},
        services::{decode_payload, parse_user_id},
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;
use utoipa::OpenApi;

/// Builds a router over a fresh, empty repository.
pub fn new_handler(not_found: NotFoundPolicy) -> Router {
    api_routes(AppState::new(InMemoryStorage::new(), not_found))
}

// Define API routes
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/users", get(list_users).post(create_user).put(update_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(fallback)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
async fn index() -> &'static str {
    "Hello World!"
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, in no particular order", body = Vec<User>)
    )
)]
async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.service.list_users().await)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = u64, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved, or a `No User ID` message when lenient", body = User),
        (status = 400, description = "Id is not an integer", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found when strict", body = String, content_type = "text/plain")
    )
)]
async fn get_user(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<Json<User>, ApiError> {
    let user_id = parse_user_id(&raw_id).map_err(|e| {
        warn!(raw_id = %raw_id, "rejected user id");
        state.reject(e)
    })?;
    let user = state.service.get_user(user_id).await.map_err(|e| state.reject(e))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body", body = String, content_type = "text/plain")
    )
)]
async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let payload = decode_payload(&body).map_err(|e| {
        warn!(error = %e, "rejected create body");
        state.reject(e)
    })?;
    let user = state.service.create_user(payload).await;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated, or a `No User ID` message when lenient", body = User),
        (status = 400, description = "Malformed body", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found when strict", body = String, content_type = "text/plain")
    )
)]
async fn update_user(State(state): State<AppState>, body: Bytes) -> Result<Json<User>, ApiError> {
    let patch = decode_payload(&body).map_err(|e| {
        warn!(error = %e, "rejected update body");
        state.reject(e)
    })?;
    let user = state.service.update_user(patch).await.map_err(|e| state.reject(e))?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = u64, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted, or a `No User ID` message when lenient", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not an integer", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found when strict", body = String, content_type = "text/plain")
    )
)]
async fn delete_user(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<String, ApiError> {
    let user_id = parse_user_id(&raw_id).map_err(|e| {
        warn!(raw_id = %raw_id, "rejected user id");
        state.reject(e)
    })?;
    state.service.delete_user(user_id).await.map_err(|e| state.reject(e))?;
    Ok(format!("Deleted User ID : {}", user_id))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
