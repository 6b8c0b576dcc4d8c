//! Request extractors that answer rejections with the `AppError` envelope

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::Json;
use http::request::Parts;
use serde::de::DeserializeOwned;
use shared::error::AppError;

use crate::validation::RequestRules;

/// JSON body that has passed its [`RequestRules`]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + RequestRules,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        value.check()?;
        Ok(ValidJson(value))
    }
}

/// Path parameters; parse failures become 400
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(|e| AppError::invalid_request(e.body_text()))
    }
}
