//! The sheet's field schema — its header row.
//!
//! The header is written once when a new sheet file is created, and every
//! open and read re-checks it so a file with a different layout is rejected
//! up front instead of producing garbled records.

use crate::Error;

/// Column order of every row in the sheet.
///
/// The first six columns mirror the sign-up form; `created_at` is appended
/// by the store at write time.
pub const HEADER: [&str; 7] = [
  "name",
  "age",
  "phone",
  "city",
  "sex",
  "participated_last_event",
  "created_at",
];

/// Column indices, kept next to [`HEADER`] so they cannot drift apart.
pub mod col {
  pub const NAME: usize = 0;
  pub const AGE: usize = 1;
  pub const PHONE: usize = 2;
  pub const CITY: usize = 3;
  pub const SEX: usize = 4;
  pub const PARTICIPATION: usize = 5;
  pub const CREATED_AT: usize = 6;
}

/// Verify that `found` is exactly [`HEADER`].
pub fn check_header(found: &csv::StringRecord) -> Result<(), Error> {
  if found.len() == HEADER.len()
    && found.iter().zip(HEADER).all(|(cell, expected)| cell == expected)
  {
    return Ok(());
  }
  Err(Error::HeaderMismatch {
    expected: HEADER.iter().map(|c| (*c).to_owned()).collect(),
    found:    found.iter().map(str::to_owned).collect(),
  })
}
