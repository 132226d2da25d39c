//! Encoding and decoding helpers between survey types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings, ids are lowercase hex, and the question
//! list is a compact JSON array.

use chrono::{DateTime, Utc};
use survey_core::survey::{Question, SurveyForm, SurveyId};

use crate::{Error, Result};

// ─── SurveyId ─────────────────────────────────────────────────────────────────

pub fn encode_id(id: SurveyId) -> String { id.to_hex() }

pub fn decode_id(s: &str) -> Result<SurveyId> { Ok(s.parse()?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Questions ────────────────────────────────────────────────────────────────

pub fn encode_questions(questions: &[Question]) -> Result<String> {
  Ok(serde_json::to_string(questions)?)
}

pub fn decode_questions(s: &str) -> Result<Vec<Question>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// Column values for one `survey_forms` row, before decoding.
pub struct RawSurvey {
  pub survey_id:      String,
  pub title:          String,
  pub description:    String,
  pub questions_json: String,
  pub created_by:     String,
  pub created_at:     String,
  pub is_active:      bool,
}

impl RawSurvey {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      survey_id:      row.get(0)?,
      title:          row.get(1)?,
      description:    row.get(2)?,
      questions_json: row.get(3)?,
      created_by:     row.get(4)?,
      created_at:     row.get(5)?,
      is_active:      row.get(6)?,
    })
  }

  pub fn into_form(self) -> Result<SurveyForm> {
    Ok(SurveyForm {
      id:          decode_id(&self.survey_id)?,
      title:       self.title,
      description: self.description,
      questions:   decode_questions(&self.questions_json)?,
      created_by:  self.created_by,
      created_at:  Some(decode_dt(&self.created_at)?),
      is_active:   self.is_active,
    })
  }
}
