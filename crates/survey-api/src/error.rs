//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use survey_core::update::UpdateError;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Update(#[from] UpdateError),

  #[error("Method not allowed")]
  MethodNotAllowed,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Update(
        UpdateError::MalformedRequest(_) | UpdateError::MissingIdentifier,
      ) => StatusCode::BAD_REQUEST,
      ApiError::Update(UpdateError::Forbidden) => StatusCode::FORBIDDEN,
      ApiError::Update(UpdateError::NotFound(_)) => StatusCode::NOT_FOUND,
      ApiError::Update(UpdateError::Storage(_)) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    // `UpdateError`'s Display never includes the store's source error.
    (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
  }
}
