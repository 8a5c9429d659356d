//! `GET /reports/{group_key}` — gated count tables for the dashboard charts.
//!
//! `group_key` is one of `city`, `sex`, `participation`. The participation
//! report additionally carries the two named totals.

use axum::{
  Json,
  extract::{Path, State},
};
use bib_core::{
  aggregate::{self, CountRow, GroupKey, ParticipationTotals},
  store::RegistrationStore,
};
use serde::Serialize;

use crate::{
  AppState,
  auth::{self, DashboardSession},
  error::ApiError,
};

#[derive(Debug, Serialize)]
pub struct ReportResponse {
  pub group_key: GroupKey,
  /// Distinct values with their counts, sorted by value.
  pub rows:      Vec<CountRow>,
  /// Only present for the participation report.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub totals:    Option<ParticipationTotals>,
}

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  DashboardSession(session): DashboardSession,
  Path(group_key): Path<GroupKey>,
) -> Result<Json<ReportResponse>, ApiError>
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

  let result = aggregate::aggregate(&records, group_key);
  let totals = (group_key == GroupKey::Participation)
    .then(|| aggregate::participation_totals(&records));

  Ok(Json(ReportResponse { group_key: result.group_key, rows: result.rows, totals }))
}
