//! Encoding and decoding between [`Registration`] values and CSV cells.
//!
//! Timestamps are stored as RFC 3339 strings. The `sex` and participation
//! columns hold the same pt-BR labels the sign-up form offers.

use bib_core::registration::{Participation, Registration, Sex};
use chrono::{DateTime, Utc};

use crate::{Error, Result, schema::col};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(line: u64, s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|_| Error::BadCell {
      line,
      column: "created_at",
      value: s.to_owned(),
    })
}

/// Render one stored record as a row in [`crate::schema::HEADER`] order.
pub fn encode_row(r: &Registration) -> [String; 7] {
  [
    r.name.clone(),
    r.age.to_string(),
    r.phone.clone(),
    r.city.clone(),
    r.sex.label().to_owned(),
    r.participated_last_event.label().to_owned(),
    encode_dt(r.created_at),
  ]
}

/// Decode one data row. `line` is the 1-based line number in the file,
/// used only for error context.
///
/// The reader is strict about row width, so a record that reaches here has
/// exactly [`HEADER`](crate::schema::HEADER)'s field count; a short or long
/// row has already surfaced as [`Error::Csv`].
pub fn decode_row(
  line: u64,
  record: &csv::StringRecord,
) -> Result<Registration> {
  let age_cell = &record[col::AGE];
  let age = age_cell.parse::<u32>().map_err(|_| Error::BadCell {
    line,
    column: "age",
    value: age_cell.to_owned(),
  })?;

  let sex_cell = &record[col::SEX];
  let sex = Sex::parse_label(sex_cell).ok_or_else(|| Error::BadCell {
    line,
    column: "sex",
    value: sex_cell.to_owned(),
  })?;

  let part_cell = &record[col::PARTICIPATION];
  let participated_last_event =
    Participation::parse_label(part_cell).ok_or_else(|| Error::BadCell {
      line,
      column: "participated_last_event",
      value: part_cell.to_owned(),
    })?;

  Ok(Registration {
    name: record[col::NAME].to_owned(),
    age,
    phone: record[col::PHONE].to_owned(),
    city: record[col::CITY].to_owned(),
    sex,
    participated_last_event,
    created_at: decode_dt(line, &record[col::CREATED_AT])?,
  })
}
