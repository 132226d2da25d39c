//! The survey update operation.
//!
//! [`update_survey_form`] takes the raw request body and the caller's role and
//! has no transport dependency. Checks run in a fixed order and each one
//! short-circuits before the store is touched:
//!
//! 1. body decodes into a [`SurveyForm`] — else [`UpdateError::MalformedRequest`]
//! 2. `id` is set — else [`UpdateError::MissingIdentifier`]
//! 3. role is [`PRIVILEGED_ROLE`] — else [`UpdateError::Forbidden`]
//!
//! Then exactly one `update_by_id` call is made. No retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  store::SurveyStore,
  survey::{SurveyForm, SurveyId, SurveyUpdate},
};

/// The only role allowed to update surveys.
pub const PRIVILEGED_ROLE: &str = "admin";

pub const UPDATED_MESSAGE: &str = "Survey updated successfully";

/// Why an update was rejected. The `Display` text is safe to show callers.
#[derive(Debug, Error)]
pub enum UpdateError {
  #[error("Invalid JSON")]
  MalformedRequest(#[source] serde_json::Error),

  #[error("Survey ID is required")]
  MissingIdentifier,

  #[error("Forbidden")]
  Forbidden,

  #[error("Survey not found")]
  NotFound(SurveyId),

  /// The store failed; the source is for logs only.
  #[error("Failed to update survey")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Success body: the echoed id and a fixed confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfirmation {
  pub id:      SurveyId,
  pub message: String,
}

impl UpdateConfirmation {
  pub fn new(id: SurveyId) -> Self {
    Self { id, message: UPDATED_MESSAGE.to_owned() }
  }
}

/// Validate `body` and `caller_role`, then overwrite the addressed form's
/// `title`, `description`, `questions` and `is_active`.
///
/// `caller_role` is `None` when the caller sent no role at all.
pub async fn update_survey_form<S>(
  store: &S,
  body: &[u8],
  caller_role: Option<&str>,
) -> Result<UpdateConfirmation, UpdateError>
where
  S: SurveyStore,
{
  let form: SurveyForm = serde_json::from_slice(body).map_err(|e| {
    tracing::debug!(error = %e, "rejecting undecodable survey body");
    UpdateError::MalformedRequest(e)
  })?;

  if form.id.is_nil() {
    tracing::debug!("rejecting survey update without id");
    return Err(UpdateError::MissingIdentifier);
  }

  if caller_role != Some(PRIVILEGED_ROLE) {
    tracing::debug!(id = %form.id, role = ?caller_role, "rejecting unprivileged survey update");
    return Err(UpdateError::Forbidden);
  }

  let id = form.id;
  let result = store
    .update_by_id(id, SurveyUpdate::from(form))
    .await
    .map_err(|e| {
      tracing::error!(%id, error = %e, "survey update failed in store");
      UpdateError::Storage(Box::new(e))
    })?;

  if result.matched_count == 0 {
    tracing::debug!(%id, "no survey matched update");
    return Err(UpdateError::NotFound(id));
  }

  tracing::info!(%id, "survey updated");
  Ok(UpdateConfirmation::new(id))
}
