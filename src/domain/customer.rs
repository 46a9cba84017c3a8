//! Customer domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Unique customer identifier
    #[schema(example = 101)]
    pub customer_id: i32,
    /// Customer full name
    #[schema(example = "Asha Rao")]
    pub name: String,
    /// Contact email address
    #[schema(example = "asha.rao@example.com")]
    pub email: String,
    /// Ten digit mobile number
    #[schema(example = "9876543210")]
    pub mobile_number: String,
    /// Postal address
    #[schema(example = "12 MG Road, Bengaluru")]
    pub address: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Data needed to register a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub address: String,
}

/// Full replacement of an existing customer's details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub address: String,
}

impl Customer {
    /// Apply an update, bumping the modification timestamp.
    pub fn apply(&mut self, update: UpdateCustomer) {
        self.name = update.name;
        self.email = update.email;
        self.mobile_number = update.mobile_number;
        self.address = update.address;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_fields_and_keeps_identity() {
        let created = Utc::now();
        let mut customer = Customer {
            customer_id: 4,
            name: "Old Name".to_string(),
            email: "old@example.com".to_string(),
            mobile_number: "1111111111".to_string(),
            address: "Old Street".to_string(),
            created_at: created,
            updated_at: created,
        };

        customer.apply(UpdateCustomer {
            customer_id: 4,
            name: "New Name".to_string(),
            email: "new@example.com".to_string(),
            mobile_number: "2222222222".to_string(),
            address: "New Street".to_string(),
        });

        assert_eq!(customer.customer_id, 4);
        assert_eq!(customer.name, "New Name");
        assert_eq!(customer.email, "new@example.com");
        assert_eq!(customer.created_at, created);
        assert!(customer.updated_at >= created);
    }
}
