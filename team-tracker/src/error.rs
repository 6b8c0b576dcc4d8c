//! Service-layer error type
//!
//! `ServiceError` bridges store errors (`StoreError`) and the API-layer error
//! (`AppError`) so handlers and services can propagate both with `?`.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::StoreError;

/// Service-layer error
///
/// - `Store`: backend failure (logged, mapped to InternalError)
/// - `App`: business-rule error, passed through to the client
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Store(store_err) => {
                tracing::error!(error = %store_err, "Service store error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
