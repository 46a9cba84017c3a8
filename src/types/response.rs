use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Uniform envelope returned by customer mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResponseInfo {
    /// Numeric HTTP status
    #[schema(example = 201)]
    pub code: u16,
    /// Status name in upper snake case
    #[schema(example = "CREATED")]
    pub status: String,
    /// Outcome message reported by the service
    #[schema(example = "Customer added successfully")]
    pub message: String,
    /// Request path
    #[schema(example = "/customers")]
    pub path: String,
}

impl ResponseInfo {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            status: status_name(status),
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Upper snake case name of a status, e.g. `ACCEPTED`, `NOT_FOUND`
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| reason.to_uppercase().replace([' ', '-'], "_"))
        .unwrap_or_else(|| status.as_u16().to_string())
}

impl IntoResponse for ResponseInfo {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(status_name(StatusCode::CREATED), "CREATED");
        assert_eq!(status_name(StatusCode::ACCEPTED), "ACCEPTED");
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::NON_AUTHORITATIVE_INFORMATION), "NON_AUTHORITATIVE_INFORMATION");
    }

    #[test]
    fn test_envelope_fields() {
        let info = ResponseInfo::new(StatusCode::ACCEPTED, "Customer updated successfully", "/customers");

        assert_eq!(info.code, 202);
        assert_eq!(info.status, "ACCEPTED");
        assert_eq!(info.message, "Customer updated successfully");
        assert_eq!(info.path, "/customers");
    }

    #[test]
    fn test_envelope_response_uses_its_status() {
        let response = ResponseInfo::new(StatusCode::CREATED, "ok", "/customers").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
