//! Error types for `survey-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid survey id: {0:?}")]
  InvalidSurveyId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
