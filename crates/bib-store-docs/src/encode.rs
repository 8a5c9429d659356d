//! Encoding and decoding helpers between domain types and stored documents.
//!
//! The document body is the JSON serialisation of the form fields; the
//! server-assigned timestamp lives in its own column as an RFC 3339 string.
//! Document ids are hyphenated lowercase UUIDs.

use bib_core::registration::{NewRegistration, Registration};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_body(input: &NewRegistration) -> Result<String> {
  Ok(serde_json::to_string(input)?)
}

/// A row as read from SQLite, before decoding.
pub struct RawDoc {
  pub body:       String,
  pub created_at: String,
}

impl RawDoc {
  pub fn into_registration(self) -> Result<Registration> {
    let fields: NewRegistration = serde_json::from_str(&self.body)?;
    let created_at = decode_dt(&self.created_at)?;
    Ok(fields.into_stored(created_at))
  }
}
