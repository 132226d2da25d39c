//! JSON HTTP API for the survey service.
//!
//! Exposes an axum [`Router`] backed by any [`survey_core::store::SurveyStore`].
//! TLS and listener concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = survey_api::api_router(store.clone(), 1024 * 1024);
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod surveys;

use std::sync::Arc;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  http::{HeaderName, HeaderValue, header},
  routing::put,
};
use survey_core::store::SurveyStore;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub use error::ApiError;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "PUT, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, X-User-Role, X-User-ID";

/// Build the API router for `store`.
///
/// Every response, errors and `405`s included, carries the CORS headers.
/// Bodies larger than `max_body_bytes` are refused with `413`.
pub fn api_router<S>(store: Arc<S>, max_body_bytes: usize) -> Router<()>
where
  S: SurveyStore + 'static,
{
  Router::new()
    .route(
      "/update-survey",
      put(surveys::update::<S>)
        .options(surveys::preflight)
        .fallback(surveys::method_not_allowed),
    )
    .with_state(store)
    .layer(DefaultBodyLimit::max(max_body_bytes))
    .layer(cors_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
    .layer(cors_header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
    .layer(cors_header(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
    .layer(TraceLayer::new_for_http())
}

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
  SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

#[cfg(test)]
mod tests;
