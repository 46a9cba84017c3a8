//! Authentication service - Credential verification and token issuance.
//!
//! Unknown usernames and wrong passwords produce the same
//! `AppError::BadCredentials`, so callers cannot probe for accounts.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::{TokenService, UserDetailsService};
use crate::domain::{Password, UserDetails};
use crate::errors::{AppError, AppResult};

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT for the `Authorization: Bearer` header
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a username/password pair and return the account
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<UserDetails>;

    /// Verify credentials and mint a token for the account
    async fn issue_token(&self, username: &str, password: &str) -> AppResult<TokenResponse>;

    /// Resolve a bearer token to the account it was issued for
    async fn authorize(&self, token: &str) -> AppResult<UserDetails>;
}

/// Concrete AuthService over a user lookup and a token service.
pub struct Authenticator {
    users: Arc<dyn UserDetailsService>,
    tokens: Arc<TokenService>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserDetailsService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<UserDetails> {
        let Some(user) = self.users.load_user_by_username(username).await? else {
            Password::verify_dummy(password);
            tracing::warn!(username, "Authentication failed: unknown user");
            return Err(AppError::BadCredentials);
        };

        if !Password::from_hash(user.password_hash.clone()).verify(password) {
            tracing::warn!(username, "Authentication failed: wrong password");
            return Err(AppError::BadCredentials);
        }

        Ok(user)
    }

    async fn issue_token(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let user = self.authenticate(username, password).await?;
        let token = self.tokens.generate_token(&user)?;

        tracing::info!(username = %user.username, "Token issued");
        Ok(TokenResponse { token })
    }

    async fn authorize(&self, token: &str) -> AppResult<UserDetails> {
        let username = self.tokens.extract_username(token)?;

        let user = self
            .users
            .load_user_by_username(&username)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username = %username, "Token subject has no account");
                AppError::Unauthorized
            })?;

        if !self.tokens.validate_token(token, &user)? {
            return Err(AppError::Unauthorized);
        }

        Ok(user)
    }
}
