//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Status mapping:
//! - `Unauthorized` → 401 with a `WWW-Authenticate: Bearer` challenge
//! - `InvalidSubmission` → 422 listing every violated rule
//! - `StoreWrite` → 503, presented to the submitter as retryable
//! - `StoreRead` → 502, so "data unavailable" is never confused with an
//!   empty registration list

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use bib_core::error::RejectionReason;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("unauthorized")]
  Unauthorized,

  #[error("submission rejected")]
  InvalidSubmission(Vec<RejectionReason>),

  #[error("storage write failed: {0}")]
  StoreWrite(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("storage read failed: {0}")]
  StoreRead(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Unauthorized => {
        let mut res = (
          StatusCode::UNAUTHORIZED,
          Json(json!({ "error": "unauthorized" })),
        )
          .into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Bearer realm=\"bib\""),
        );
        res
      }
      ApiError::InvalidSubmission(reasons) => {
        let reasons: Vec<String> =
          reasons.iter().map(ToString::to_string).collect();
        (
          StatusCode::UNPROCESSABLE_ENTITY,
          Json(json!({ "error": "submission rejected", "reasons": reasons })),
        )
          .into_response()
      }
      ApiError::StoreWrite(e) => (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
          "error":  "could not save the registration, please try again",
          "detail": e.to_string(),
        })),
      )
        .into_response(),
      ApiError::StoreRead(e) => (
        StatusCode::BAD_GATEWAY,
        Json(json!({
          "error":  "registration data unavailable",
          "detail": e.to_string(),
        })),
      )
        .into_response(),
    }
  }
}
