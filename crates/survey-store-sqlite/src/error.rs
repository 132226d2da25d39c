//! Error type for `survey-store-sqlite`.

use survey_core::survey::SurveyId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] survey_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Raised by [`crate::SqliteStore::insert`]; updates never insert.
  #[error("survey {0} already exists")]
  AlreadyExists(SurveyId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
