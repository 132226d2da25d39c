//! Survey form types — the single document kind this service mutates.
//!
//! A survey form is created elsewhere; this service only rewrites its
//! mutable fields in place. The author and creation timestamp never travel
//! in an update.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use rand_core::{OsRng, RngCore as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

// ─── Identifier ──────────────────────────────────────────────────────────────

/// A 12-byte object identifier, rendered as 24 lowercase hex characters.
///
/// The all-zero value is the *nil* id and means "unset". JSON `""`, `null`
/// and a missing field all decode to nil; any other non-hex or wrong-length
/// string is a decode error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurveyId([u8; 12]);

impl SurveyId {
  pub const NIL: Self = Self([0; 12]);

  /// A fresh random id from the OS RNG.
  pub fn generate() -> Self {
    let mut bytes = [0u8; 12];
    OsRng.fill_bytes(&mut bytes);
    Self(bytes)
  }

  pub fn is_nil(&self) -> bool { self.0 == [0; 12] }

  /// Lowercase hex form, as stored and returned to callers.
  pub fn to_hex(&self) -> String { hex::encode(self.0) }
}

impl fmt::Display for SurveyId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}

impl FromStr for SurveyId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let mut bytes = [0u8; 12];
    hex::decode_to_slice(s, &mut bytes)
      .map_err(|_| Error::InvalidSurveyId(s.to_owned()))?;
    Ok(Self(bytes))
  }
}

impl Serialize for SurveyId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_hex())
  }
}

impl<'de> Deserialize<'de> for SurveyId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    match Option::<String>::deserialize(deserializer)?.as_deref() {
      None | Some("") => Ok(Self::NIL),
      Some(s) => s.parse().map_err(serde::de::Error::custom),
    }
  }
}

/// Read JSON `null` as the type's default, as for an absent value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─── Question ────────────────────────────────────────────────────────────────

/// One entry in a survey's ordered question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  /// Unique within the owning form.
  pub id:       String,
  pub text:     String,
  /// Input-kind tag (e.g. `"text"`, `"single_choice"`). The valid set is a
  /// contract with the presentation layer and is not checked here.
  #[serde(rename = "type")]
  pub kind:     String,
  /// Closed set of choices; empty for free-form kinds.
  #[serde(
    default,
    deserialize_with = "null_as_default",
    skip_serializing_if = "Vec::is_empty"
  )]
  pub options:  Vec<String>,
  #[serde(default)]
  pub required: bool,
}

// ─── SurveyForm ──────────────────────────────────────────────────────────────

/// A persisted survey definition.
///
/// Wire names are snake_case; the camelCase spellings are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyForm {
  #[serde(default)]
  pub id:          SurveyId,
  pub title:       String,
  pub description: String,
  /// Presentation order; preserved verbatim. Required, but `null` reads as
  /// empty.
  #[serde(deserialize_with = "null_as_default")]
  pub questions:   Vec<Question>,
  #[serde(default, alias = "createdBy", deserialize_with = "null_as_default")]
  pub created_by:  String,
  #[serde(default, alias = "createdAt")]
  pub created_at:  Option<DateTime<Utc>>,
  #[serde(alias = "isActive")]
  pub is_active:   bool,
}

// ─── SurveyUpdate ────────────────────────────────────────────────────────────

/// The write set of an update: exactly the mutable fields of a form.
///
/// `id` addresses the update and is passed separately; `created_by` and
/// `created_at` are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyUpdate {
  pub title:       String,
  pub description: String,
  pub questions:   Vec<Question>,
  pub is_active:   bool,
}

impl From<SurveyForm> for SurveyUpdate {
  fn from(form: SurveyForm) -> Self {
    Self {
      title:       form.title,
      description: form.description,
      questions:   form.questions,
      is_active:   form.is_active,
    }
  }
}
