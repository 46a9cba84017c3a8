//! Customer service - Customer registration and maintenance.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_CUSTOMER_ADDED, MSG_CUSTOMER_DELETED, MSG_CUSTOMER_UPDATED};
use crate::domain::{Customer, NewCustomer, UpdateCustomer};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Customer service trait for dependency injection.
///
/// Mutations return the human-readable outcome message that the HTTP layer
/// places in the response envelope.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Register a new customer
    async fn add_customer(&self, customer: NewCustomer) -> AppResult<String>;

    /// Replace an existing customer's details
    async fn update_customer(&self, customer: UpdateCustomer) -> AppResult<String>;

    /// Remove a customer
    async fn cancel_customer(&self, id: i32) -> AppResult<String>;

    /// List every customer
    async fn show_all_customers(&self) -> AppResult<Vec<Customer>>;
}

/// Concrete implementation of CustomerService using Unit of Work.
pub struct CustomerManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CustomerManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CustomerService for CustomerManager<U> {
    async fn add_customer(&self, customer: NewCustomer) -> AppResult<String> {
        let created = self.uow.customers().create(customer).await?;
        tracing::info!(customer_id = created.customer_id, "Customer added");
        Ok(MSG_CUSTOMER_ADDED.to_string())
    }

    async fn update_customer(&self, customer: UpdateCustomer) -> AppResult<String> {
        let id = customer.customer_id;
        self.uow
            .customers()
            .update(customer)
            .await?
            .ok_or(AppError::CustomerNotFound(id))?;

        tracing::info!(customer_id = id, "Customer updated");
        Ok(MSG_CUSTOMER_UPDATED.to_string())
    }

    async fn cancel_customer(&self, id: i32) -> AppResult<String> {
        if !self.uow.customers().delete(id).await? {
            return Err(AppError::CustomerNotFound(id));
        }

        tracing::info!(customer_id = id, "Customer deleted");
        Ok(MSG_CUSTOMER_DELETED.to_string())
    }

    async fn show_all_customers(&self) -> AppResult<Vec<Customer>> {
        self.uow.customers().list().await
    }
}
