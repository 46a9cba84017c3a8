//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion; collaborators are passed in explicitly.

mod auth_service;
pub mod container;
mod customer_service;
pub mod token_service;
mod user_details_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use customer_service::{CustomerManager, CustomerService};
pub use token_service::{IdentityClaims, TokenError, TokenService};
pub use user_details_service::{AccountManager, UserDetailsService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
