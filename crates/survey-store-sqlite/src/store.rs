//! [`SqliteStore`] — the SQLite implementation of [`SurveyStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use survey_core::{
  store::{SurveyStore, UpdateResult},
  survey::{SurveyForm, SurveyId, SurveyUpdate},
};

use crate::{
  Error, Result,
  encode::{RawSurvey, encode_dt, encode_id, encode_questions},
  schema::SCHEMA,
};

const SELECT_COLUMNS: &str = "SELECT survey_id, title, description, questions_json,
          created_by, created_at, is_active
   FROM survey_forms";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A survey collection backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Persist a new form and return it as stored.
  ///
  /// Forms are normally created by another service; this exists for seeding
  /// and tests. A nil id is replaced with a fresh one and a missing
  /// `created_at` is set to now. Fails with [`Error::AlreadyExists`] if the id
  /// is taken.
  pub async fn insert(&self, mut form: SurveyForm) -> Result<SurveyForm> {
    if form.id.is_nil() {
      form.id = SurveyId::generate();
    }
    let created_at = *form.created_at.get_or_insert_with(Utc::now);

    let id_str         = encode_id(form.id);
    let title          = form.title.clone();
    let description    = form.description.clone();
    let questions_json = encode_questions(&form.questions)?;
    let created_by     = form.created_by.clone();
    let created_at_str = encode_dt(created_at);
    let is_active      = form.is_active;

    let inserted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT OR IGNORE INTO survey_forms (
             survey_id, title, description, questions_json,
             created_by, created_at, is_active
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            title,
            description,
            questions_json,
            created_by,
            created_at_str,
            is_active,
          ],
        )?)
      })
      .await?;

    if inserted == 0 {
      return Err(Error::AlreadyExists(form.id));
    }

    tracing::debug!(id = %form.id, "inserted survey");
    Ok(form)
  }
}

// ─── SurveyStore impl ────────────────────────────────────────────────────────

impl SurveyStore for SqliteStore {
  type Error = Error;

  async fn get_by_id(&self, id: SurveyId) -> Result<Option<SurveyForm>> {
    let id_str = encode_id(id);

    let raw: Option<RawSurvey> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("{SELECT_COLUMNS} WHERE survey_id = ?1"),
            rusqlite::params![id_str],
            RawSurvey::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawSurvey::into_form).transpose()
  }

  async fn update_by_id(&self, id: SurveyId, update: SurveyUpdate) -> Result<UpdateResult> {
    let id_str         = encode_id(id);
    let questions_json = encode_questions(&update.questions)?;
    let SurveyUpdate { title, description, is_active, .. } = update;

    // One statement, so the row is rewritten entirely or not at all. SQLite
    // counts a matched row as changed even when every value is identical.
    let matched = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE survey_forms
             SET title = ?2, description = ?3, questions_json = ?4, is_active = ?5
           WHERE survey_id = ?1",
          rusqlite::params![id_str, title, description, questions_json, is_active],
        )?)
      })
      .await?;

    Ok(UpdateResult { matched_count: matched as u64 })
  }
}
