//! The registration pipeline: validate, normalize, persist.
//!
//! One submission produces at most one stored record. Every failure path
//! leaves the store untouched, so a rejected or storage-failed submission is
//! observably absent.

use phonenumber::country;

use crate::{
  error::RegistrationError,
  registration::Registration,
  store::RegistrationStore,
  validate::{RawSubmission, validate},
};

/// Run a raw submission through validation and, if it passes, append it.
///
/// The store assigns `created_at`; the returned [`Registration`] is the
/// durable record exactly as written. Storage failures are reported as
/// [`RegistrationError::StorageFailure`] for the caller to present as
/// retryable, never as a process exit.
pub async fn register<S: RegistrationStore>(
  store: &S,
  raw: &RawSubmission,
  region: country::Id,
) -> Result<Registration, RegistrationError<S::Error>> {
  let input = validate(raw, region).map_err(RegistrationError::Invalid)?;
  store
    .append(input)
    .await
    .map_err(RegistrationError::StorageFailure)
}
