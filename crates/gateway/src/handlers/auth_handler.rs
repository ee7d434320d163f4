//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use auth_service_lib::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};
use common::AppResult;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User registration body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterBody {
    /// Display name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Matheus")]
    pub name: String,
    /// Email address, used to log in
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "matheus@example.com")]
    pub email: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// User login body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginBody {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "matheus@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/v1/users/register",
    tag = "Authentication",
    request_body = RegisterBody,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegisterBody>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let resp = state
        .register
        .execute(RegisterRequest {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(resp)))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/v1/users/login",
    tag = "Authentication",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Wrong email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginBody>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .login
        .execute(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(token))
}
