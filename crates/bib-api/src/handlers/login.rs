//! `POST /login` — check the dashboard secret.
//!
//! Lets the UI verify the secret once before rendering the dashboard.
//! Subsequent gated requests still carry the secret as a bearer token;
//! there is no server-side session state.

use axum::{Json, extract::State, http::StatusCode};
use bib_core::{auth::Session, store::RegistrationStore};
use serde::Deserialize;

use crate::{AppState, auth, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub secret: String,
}

/// Returns `204 No Content` on a correct secret, `401` otherwise.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<StatusCode, ApiError>
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let session = Session::open(state.gate.as_ref(), &body.secret);
  auth::require(session)?;
  Ok(StatusCode::NO_CONTENT)
}
