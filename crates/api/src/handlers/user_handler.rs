//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use uuid::Uuid;

use common::AppResult;
use domain::{CreateUser, UpdateEmail, UpdatePassword, UpdateUser, UserResponse};

use crate::extractors::{JsonBody, PathParam};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/by-email/:email", get(get_user_by_email))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/password", put(update_password))
        .route("/:id/email", put(update_email))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Get user by email address
#[utoipa::path(
    get,
    path = "/users/by-email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email address")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    PathParam(email): PathParam<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user_by_email(&email).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update first and/or last name
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(payload): JsonBody<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Change password
#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdatePassword,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Password missing"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(payload): JsonBody<UpdatePassword>,
) -> AppResult<StatusCode> {
    state.user_service.update_password(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Change email address
#[utoipa::path(
    put,
    path = "/users/{id}/email",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateEmail,
    responses(
        (status = 200, description = "Email changed", body = UserResponse),
        (status = 400, description = "Email missing or malformed"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_email(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(payload): JsonBody<UpdateEmail>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update_email(id, payload).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete user permanently
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
