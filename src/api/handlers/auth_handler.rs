//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// Credential request for `/token`
#[derive(Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    /// Account username
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "admin")]
    pub username: String,
    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl std::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/token", post(generate_token))
}

/// Exchange username and password for a JWT
#[utoipa::path(
    post,
    path = "/token",
    tag = "Authentication",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Bad credentials")
    )
)]
pub async fn generate_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    tracing::info!(request = ?payload, "generate_token() called");

    let token = state
        .auth_service
        .issue_token(&payload.username, &payload.password)
        .await?;

    Ok(Json(token))
}
