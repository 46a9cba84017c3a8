//! Customer API - customer management behind JWT authentication
//!
//! Clients exchange a username and password for a signed bearer token at
//! `POST /token`, then use that token to create, update, cancel and list
//! customers under `/customers`.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Customer and principal entities
//! - **services**: Token issuance, authentication and customer use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Create a login account
//! cargo run -- users create --username admin --password 'SecurePass123!'
//!
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Customer, Password, UserDetails};
pub use errors::{AppError, AppResult};
pub use services::TokenService;
