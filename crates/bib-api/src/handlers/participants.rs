//! `GET /participants` — the gated dashboard listing.

use axum::{Json, extract::State};
use bib_core::{phone, registration::Registration, store::RegistrationStore};
use serde::Serialize;

use crate::{
  AppState,
  auth::{self, DashboardSession},
  error::ApiError,
};

/// One stored record plus its dashboard phone rendering.
#[derive(Debug, Serialize)]
pub struct ParticipantRow {
  #[serde(flatten)]
  pub registration:  Registration,
  /// Best-effort display form; `Não informado` / `Número inválido` when the
  /// stored value is missing or unparseable.
  pub phone_display: String,
}

#[derive(Debug, Serialize)]
pub struct ParticipantsResponse {
  pub count:        usize,
  pub participants: Vec<ParticipantRow>,
}

/// Every stored registration, in insertion order.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  DashboardSession(session): DashboardSession,
) -> Result<Json<ParticipantsResponse>, ApiError>
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  auth::require(session)?;

  let records = state
    .store
    .list_all()
    .await
    .map_err(|e| ApiError::StoreRead(Box::new(e)))?;

  let participants: Vec<ParticipantRow> = records
    .into_iter()
    .map(|r| {
      let phone_display = phone::display(Some(&r.phone), state.region);
      ParticipantRow { registration: r, phone_display }
    })
    .collect();

  Ok(Json(ParticipantsResponse {
    count: participants.len(),
    participants,
  }))
}
