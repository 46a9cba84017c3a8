//! Path extractor whose rejections use the application error body.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// `Path` wrapper turning unparseable segments (e.g. `/customers/abc`) into
/// `AppError::Validation` instead of axum's plain-text rejection.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Rejected path parameters: {}", e.body_text());
                AppError::validation(e.body_text())
            })?;

        Ok(ValidatedPath(value))
    }
}
