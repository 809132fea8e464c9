//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use domain::{CreateUser, UpdateEmail, UpdatePassword, UpdateUser, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::get_user_by_email,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::update_password,
        crate::handlers::user_handler::update_email,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUser,
            UpdateUser,
            UpdatePassword,
            UpdateEmail,
            UserResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
