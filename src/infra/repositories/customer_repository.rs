//! Customer repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use crate::domain::{Customer, NewCustomer, UpdateCustomer};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Absent records are reported as `None`/`false`; deciding whether that is
/// an error is left to the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List all customers ordered by ID
    async fn list(&self) -> AppResult<Vec<Customer>>;

    /// Insert a new customer, returning it with its assigned ID
    async fn create(&self, customer: NewCustomer) -> AppResult<Customer>;

    /// Replace an existing customer's details; `None` if the ID is unknown
    async fn update(&self, customer: UpdateCustomer) -> AppResult<Option<Customer>>;

    /// Delete customer by ID; `false` if nothing was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of CustomerRepository
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Customer::from))
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn list(&self) -> AppResult<Vec<Customer>> {
        let models = CustomerEntity::find()
            .order_by_asc(customer::Column::CustomerId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn create(&self, customer: NewCustomer) -> AppResult<Customer> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            name: Set(customer.name),
            email: Set(customer.email),
            mobile_number: Set(customer.mobile_number),
            address: Set(customer.address),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Customer::from(model))
    }

    async fn update(&self, customer: UpdateCustomer) -> AppResult<Option<Customer>> {
        let Some(mut current) = self.find_by_id(customer.customer_id).await? else {
            return Ok(None);
        };
        current.apply(customer);

        let active = ActiveModel {
            customer_id: Unchanged(current.customer_id),
            name: Set(current.name),
            email: Set(current.email),
            mobile_number: Set(current.mobile_number),
            address: Set(current.address),
            created_at: Unchanged(current.created_at),
            updated_at: Set(current.updated_at),
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Some(Customer::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = CustomerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
