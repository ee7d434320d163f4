//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use common::AppError;

use crate::state::AppState;

/// Current authenticated user extracted from JWT.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// Reject requests without a valid bearer token.
///
/// On success the caller is available to handlers as `Extension<CurrentUser>`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;

    let claims = state.tokens.verify(bearer.token())?;

    request
        .extensions_mut()
        .insert(CurrentUser { id: claims.sub });

    Ok(next.run(request).await)
}
