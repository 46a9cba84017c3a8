//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, customer_handler};
use crate::domain::Customer;
use crate::services::TokenResponse;
use crate::types::ResponseInfo;

/// OpenAPI documentation for the Customer API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer API",
        version = "0.1.0",
        description = "Customer management REST API with JWT authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::generate_token,
        // Customer endpoints
        customer_handler::add_customer,
        customer_handler::update_customer,
        customer_handler::delete_customer,
        customer_handler::list_customers,
    ),
    components(
        schemas(
            Customer,
            ResponseInfo,
            TokenResponse,
            auth_handler::TokenRequest,
            customer_handler::CustomerRequest,
            customer_handler::UpdateCustomerRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Customers", description = "Customer management operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /token"))
                        .build(),
                ),
            );
        }
    }
}
