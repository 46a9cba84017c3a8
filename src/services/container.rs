//! Service Container - Centralized service access.
//!
//! Wires the concrete services together from a database connection and
//! configuration, and hands them out as trait objects.

use std::sync::Arc;

use super::{
    AccountManager, AuthService, Authenticator, CustomerManager, CustomerService, TokenService,
    UserDetailsService,
};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get customer service
    fn customers(&self) -> Arc<dyn CustomerService>;

    /// Get user lookup service
    fn users(&self) -> Arc<dyn UserDetailsService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    customer_service: Arc<dyn CustomerService>,
    user_details_service: Arc<dyn UserDetailsService>,
}

impl Services {
    /// Create a service container from already built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        customer_service: Arc<dyn CustomerService>,
        user_details_service: Arc<dyn UserDetailsService>,
    ) -> Self {
        Self {
            auth_service,
            customer_service,
            user_details_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let tokens = Arc::new(TokenService::from_config(config));

        let user_details_service: Arc<dyn UserDetailsService> =
            Arc::new(AccountManager::new(uow.clone()));
        let auth_service = Arc::new(Authenticator::new(user_details_service.clone(), tokens));
        let customer_service = Arc::new(CustomerManager::new(uow));

        Self {
            auth_service,
            customer_service,
            user_details_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn customers(&self) -> Arc<dyn CustomerService> {
        self.customer_service.clone()
    }

    fn users(&self) -> Arc<dyn UserDetailsService> {
        self.user_details_service.clone()
    }
}
