//! Handlers for the `/update-survey` endpoint.
//!
//! | Method    | Notes |
//! |-----------|-------|
//! | `PUT`     | Body: survey form JSON; role from `X-User-Role` |
//! | `OPTIONS` | CORS preflight, `204 No Content` |
//!
//! Any other method gets `405` with a JSON error body.

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::{HeaderMap, StatusCode},
};
use survey_core::{
  store::SurveyStore,
  update::{UpdateConfirmation, update_survey_form},
};

use crate::error::ApiError;

/// Header carrying the caller's role.
pub const ROLE_HEADER: &str = "x-user-role";

/// `PUT /update-survey`
///
/// A missing or non-UTF-8 role header is treated as no role.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<UpdateConfirmation>, ApiError>
where
  S: SurveyStore,
{
  let role = headers.get(ROLE_HEADER).and_then(|v| v.to_str().ok());
  let confirmation = update_survey_form(store.as_ref(), &body, role).await?;
  Ok(Json(confirmation))
}

/// `OPTIONS /update-survey`
pub async fn preflight() -> StatusCode { StatusCode::NO_CONTENT }

/// Any other method on `/update-survey`.
pub async fn method_not_allowed() -> ApiError { ApiError::MethodNotAllowed }
