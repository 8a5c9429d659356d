//! `POST /registrations` — the public sign-up endpoint.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bib_core::{
  error::RegistrationError, pipeline, store::RegistrationStore,
  validate::RawSubmission,
};

use crate::{AppState, error::ApiError};

/// Validate a raw submission and append it to the configured backend.
///
/// Returns `201 Created` with the stored record, including the
/// server-assigned `created_at`.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Json(raw): Json<RawSubmission>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let stored = pipeline::register(state.store.as_ref(), &raw, state.region)
    .await
    .map_err(|e| match e {
      RegistrationError::Invalid(reasons) => {
        ApiError::InvalidSubmission(reasons)
      }
      RegistrationError::StorageFailure(cause) => {
        tracing::warn!(error = %cause, "registration write failed");
        ApiError::StoreWrite(Box::new(cause))
      }
    })?;

  Ok((StatusCode::CREATED, Json(stored)))
}
