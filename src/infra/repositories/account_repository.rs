//! Login account repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::user_account::{ActiveModel, Entity as UserAccountEntity};
use crate::domain::UserDetails;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by its username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserDetails>>;

    /// Persist a new account
    async fn create(&self, account: UserDetails) -> AppResult<UserDetails>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserDetails>> {
        let result = UserAccountEntity::find_by_id(username.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserDetails::from))
    }

    async fn create(&self, account: UserDetails) -> AppResult<UserDetails> {
        let active_model = ActiveModel {
            authorities: Set(account.joined_authorities()),
            username: Set(account.username),
            password_hash: Set(account.password_hash),
            created_at: Set(account.created_at),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(UserDetails::from(model))
    }
}
