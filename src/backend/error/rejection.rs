/**
 * JSON Body Extraction
 *
 * axum's own `Json` extractor rejects a malformed body with a 415 or 422 and
 * a plain-text message. Handlers here take [`ApiJson`] instead, which turns
 * every body rejection into a 400 carrying the usual `{"error", "status"}`
 * body.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::backend::error::BackendError;
use crate::shared::SharedError;

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body ({}): {}", rejection.status(), rejection.body_text());
        BackendError::SharedError(SharedError::serialization(rejection.body_text()))
    }
}

/// JSON request body whose rejection is a [`BackendError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state).await?;
        Ok(ApiJson(value))
    }
}
