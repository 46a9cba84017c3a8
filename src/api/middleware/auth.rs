//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserDetails;
use crate::errors::AppError;

/// Authenticated principal extracted from the bearer token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub username: String,
}

impl From<UserDetails> for CurrentUser {
    fn from(user: UserDetails) -> Self {
        Self {
            username: user.username,
        }
    }
}

/// JWT authentication middleware.
///
/// Resolves the bearer token to its account through the auth service, then
/// injects the CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)?;

    let user = state.auth_service.authorize(token).await?;

    request.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(request).await)
}
