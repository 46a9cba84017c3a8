//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! DDD: Domain layer has NO infrastructure dependencies.
//! Contains: Entities, Value Objects.

pub mod customer;
pub mod password;
pub mod user_details;

pub use customer::{Customer, NewCustomer, UpdateCustomer};
pub use password::Password;
pub use user_details::UserDetails;
