//! User details service - Loads and provisions login accounts.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MAX_USERNAME_LENGTH;
use crate::domain::{Password, UserDetails};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User lookup for the authentication layer.
#[async_trait]
pub trait UserDetailsService: Send + Sync {
    /// Load an account by username; `None` if it does not exist
    async fn load_user_by_username(&self, username: &str) -> AppResult<Option<UserDetails>>;

    /// Create a login account, hashing the password
    async fn create_user(
        &self,
        username: String,
        password: String,
        authorities: Vec<String>,
    ) -> AppResult<UserDetails>;
}

/// Concrete implementation of UserDetailsService using Unit of Work.
pub struct AccountManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AccountManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserDetailsService for AccountManager<U> {
    async fn load_user_by_username(&self, username: &str) -> AppResult<Option<UserDetails>> {
        self.uow.accounts().find_by_username(username).await
    }

    async fn create_user(
        &self,
        username: String,
        password: String,
        authorities: Vec<String>,
    ) -> AppResult<UserDetails> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(AppError::validation(format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            )));
        }

        if self.uow.accounts().find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let account = self
            .uow
            .accounts()
            .create(UserDetails::new(username, password_hash, authorities))
            .await?;

        tracing::info!(username = %account.username, "Login account created");
        Ok(account)
    }
}
