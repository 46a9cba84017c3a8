//! Customer handlers.
//!
//! Each mutation forwards to the customer service and wraps the returned
//! message in a `ResponseInfo` envelope.

use axum::{
    extract::{Extension, OriginalUri, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::MOBILE_NUMBER_PATTERN;
use crate::domain::{Customer, NewCustomer, UpdateCustomer};
use crate::errors::AppResult;
use crate::types::ResponseInfo;

static MOBILE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MOBILE_NUMBER_PATTERN).expect("mobile number pattern is valid"));

/// Customer registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CustomerRequest {
    /// Customer full name
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    #[schema(example = "Asha Rao")]
    pub name: String,
    /// Contact email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "asha.rao@example.com")]
    pub email: String,
    /// Ten digit mobile number
    #[validate(regex(path = *MOBILE_NUMBER_RE, message = "Mobile number must be exactly 10 digits"))]
    #[schema(example = "9876543210")]
    pub mobile_number: String,
    /// Postal address
    #[validate(length(min = 1, max = 200, message = "Address must be between 1 and 200 characters"))]
    #[schema(example = "12 MG Road, Bengaluru")]
    pub address: String,
}

/// Customer update request; replaces every field of an existing customer
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    /// ID of the customer to update
    #[validate(range(min = 1, message = "Customer ID must be positive"))]
    #[schema(example = 101)]
    pub customer_id: i32,
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    #[schema(example = "Asha Rao")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "asha.rao@example.com")]
    pub email: String,
    #[validate(regex(path = *MOBILE_NUMBER_RE, message = "Mobile number must be exactly 10 digits"))]
    #[schema(example = "9876543210")]
    pub mobile_number: String,
    #[validate(length(min = 1, max = 200, message = "Address must be between 1 and 200 characters"))]
    #[schema(example = "14 MG Road, Bengaluru")]
    pub address: String,
}

impl From<CustomerRequest> for NewCustomer {
    fn from(req: CustomerRequest) -> Self {
        NewCustomer {
            name: req.name,
            email: req.email,
            mobile_number: req.mobile_number,
            address: req.address,
        }
    }
}

impl From<UpdateCustomerRequest> for UpdateCustomer {
    fn from(req: UpdateCustomerRequest) -> Self {
        UpdateCustomer {
            customer_id: req.customer_id,
            name: req.name,
            email: req.email,
            mobile_number: req.mobile_number,
            address: req.address,
        }
    }
}

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_customers).post(add_customer).put(update_customer),
        )
        .route("/:id", delete(delete_customer))
}

/// Add a customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    security(("bearer_auth" = [])),
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer added", body = ResponseInfo),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn add_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(payload): ValidatedJson<CustomerRequest>,
) -> AppResult<ResponseInfo> {
    tracing::info!(user = %current_user.username, "add_customer() called");

    let message = state.customer_service.add_customer(payload.into()).await?;

    Ok(ResponseInfo::new(StatusCode::CREATED, message, uri.path()))
}

/// Update a customer
#[utoipa::path(
    put,
    path = "/customers",
    tag = "Customers",
    security(("bearer_auth" = [])),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 202, description = "Customer updated", body = ResponseInfo),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(payload): ValidatedJson<UpdateCustomerRequest>,
) -> AppResult<ResponseInfo> {
    tracing::info!(user = %current_user.username, "update_customer() called");

    let message = state.customer_service.update_customer(payload.into()).await?;

    Ok(ResponseInfo::new(StatusCode::ACCEPTED, message, uri.path()))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 202, description = "Customer deleted", body = ResponseInfo),
        (status = 400, description = "Invalid customer ID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<ResponseInfo> {
    tracing::info!(user = %current_user.username, customer_id = id, "delete_customer() called");

    let message = state.customer_service.cancel_customer(id).await?;

    Ok(ResponseInfo::new(StatusCode::ACCEPTED, message, uri.path()))
}

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_customers(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Customer>>> {
    tracing::info!(user = %current_user.username, "list_customers() called");

    let customers = state.customer_service.show_all_customers().await?;
    Ok(Json(customers))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CustomerRequest {
        CustomerRequest {
            name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            address: "12 MG Road, Bengaluru".to_string(),
        }
    }

    #[test]
    fn test_valid_customer_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_mobile_number_must_be_ten_digits() {
        for bad in ["12345", "98765432101", "98765abcde", ""] {
            let req = CustomerRequest {
                mobile_number: bad.to_string(),
                ..valid_request()
            };
            assert!(req.validate().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_name_and_email_rules() {
        let short_name = CustomerRequest {
            name: "A".to_string(),
            ..valid_request()
        };
        assert!(short_name.validate().is_err());

        let bad_email = CustomerRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_update_request_requires_positive_id() {
        let req = UpdateCustomerRequest {
            customer_id: 0,
            name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
