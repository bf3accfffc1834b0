use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;

/// JSON body extractor whose rejections use the API error shape
///
/// Unparseable bodies are bad requests; well-formed JSON with fields of the
/// wrong type is unprocessable.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(err)) => Err(ApiError::unprocessable_entity(
                format!("Invalid JSON data: {}", err),
            )),
            Err(rejection) => Err(ApiError::bad_request(format!(
                "Failed to parse JSON body: {}",
                rejection
            ))),
        }
    }
}
