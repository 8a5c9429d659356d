//! Error types for `bib-core`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated submission rule.
///
/// Validation always reports the complete set of violations, so callers can
/// surface every problem at once instead of one per round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "rule", content = "detail")]
pub enum RejectionReason {
  #[error("name must not be empty")]
  NameMissing,

  #[error("age must not be empty")]
  AgeMissing,

  #[error("age must be a whole number of digits: {0:?}")]
  AgeNotNumeric(String),

  #[error("age must be greater than zero")]
  AgeNotPositive,

  #[error("age is out of range: {0:?}")]
  AgeOutOfRange(String),

  #[error("phone must not be empty")]
  PhoneMissing,

  #[error("phone is not a valid number for the configured region: {0}")]
  PhoneInvalid(#[source] PhoneError),

  #[error("city must not be empty")]
  CityMissing,

  #[error("sex must be one of the offered options: {0:?}")]
  SexUnknown(String),

  #[error("participation must be one of the offered options: {0:?}")]
  ParticipationUnknown(String),
}

/// Failure to parse a raw phone string into a valid number.
///
/// Carries the original input so display contexts can fall back to it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("could not parse {raw:?} as a valid {region} number: {reason}")]
pub struct PhoneError {
  /// The string as the user entered it.
  pub raw:    String,
  /// The region the number was parsed under, e.g. `BR`.
  pub region: String,
  pub reason: String,
}

/// Outcome of the full registration pipeline.
#[derive(Debug, Error)]
pub enum RegistrationError<E> {
  /// The submission violated one or more rules; storage was never touched.
  #[error("submission rejected: {}", format_reasons(.0))]
  Invalid(Vec<RejectionReason>),

  /// The submission was valid but the backend write failed. Retryable.
  #[error("registration could not be stored")]
  StorageFailure(#[source] E),
}

fn format_reasons(reasons: &[RejectionReason]) -> String {
  reasons
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}
