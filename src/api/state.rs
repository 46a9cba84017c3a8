//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AuthService, CustomerService, ServiceContainer, Services};

/// Application state shared by every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Customer service
    pub customer_service: Arc<dyn CustomerService>,
    /// Database connection, probed by `/health`
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container).with_database(database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self::new(container.auth(), container.customers())
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        customer_service: Arc<dyn CustomerService>,
    ) -> Self {
        Self {
            auth_service,
            customer_service,
            database: None,
        }
    }

    /// Attach the database probed by the health endpoint.
    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}
