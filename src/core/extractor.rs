use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor whose rejections use the standard error body
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request body: {}", self.0.body_text());

        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid request body: {}", err),
            JsonRejection::JsonSyntaxError(_) => "Invalid request body".to_string(),
            JsonRejection::MissingJsonContentType(_) => {
                "Invalid request body: expected application/json".to_string()
            }
            _ => "Invalid request body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Query string extractor whose rejections use the standard error body
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected query string: {}", rejection.body_text());
                Err(AppError::BadRequest("Invalid query string".to_string()))
            }
        }
    }
}
