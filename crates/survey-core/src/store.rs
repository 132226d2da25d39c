//! The `SurveyStore` trait — the document collection the update handler
//! writes through.
//!
//! Implemented by storage backends (e.g. `survey-store-sqlite`). The handle is
//! opened once at startup and shared between concurrent requests, so
//! implementations must be safe to use from many tasks at once.

use std::future::Future;

use crate::survey::{SurveyForm, SurveyId, SurveyUpdate};

/// Outcome of a conditional update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
  /// Records matched by the id; `0` or `1` while ids are unique.
  pub matched_count: u64,
}

/// Abstraction over a survey-form collection.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SurveyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a form by id. Returns `None` if not found.
  fn get_by_id(
    &self,
    id: SurveyId,
  ) -> impl Future<Output = Result<Option<SurveyForm>, Self::Error>> + Send + '_;

  /// Overwrite the mutable fields of the form with `id`, atomically.
  ///
  /// Never inserts: an unknown id yields `matched_count == 0`. Errors are
  /// reserved for infrastructure failures.
  fn update_by_id(
    &self,
    id: SurveyId,
    update: SurveyUpdate,
  ) -> impl Future<Output = Result<UpdateResult, Self::Error>> + Send + '_;
}
