//! Unit of Work - Centralized repository access.
//!
//! Services receive a `UnitOfWork` instead of individual repositories, so
//! adding a repository does not change every service constructor.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{AccountRepository, AccountStore, CustomerRepository, CustomerStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get customer repository
    fn customers(&self) -> Arc<dyn CustomerRepository>;

    /// Get login account repository
    fn accounts(&self) -> Arc<dyn AccountRepository>;
}

/// Concrete implementation of UnitOfWork backed by one connection pool
pub struct Persistence {
    customer_repo: Arc<CustomerStore>,
    account_repo: Arc<AccountStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            customer_repo: Arc::new(CustomerStore::new(db.clone())),
            account_repo: Arc::new(AccountStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn customers(&self) -> Arc<dyn CustomerRepository> {
        self.customer_repo.clone()
    }

    fn accounts(&self) -> Arc<dyn AccountRepository> {
        self.account_repo.clone()
    }
}
