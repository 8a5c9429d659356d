//! HTTP layer for the Bib race-registration service.
//!
//! Exposes an axum [`Router`] backed by any [`RegistrationStore`]: a public
//! sign-up endpoint plus a secret-gated dashboard (participant listing and
//! count reports for the charts).

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use bib_core::{auth::CredentialCheck, store::RegistrationStore};
use phonenumber::country;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Which backend holds the registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
  /// CSV sheet file (`bib-store-sheet`).
  Sheet,
  /// SQLite document collection (`bib-store-docs`).
  Docs,
}

/// Runtime server configuration, deserialised from `config.toml`.
///
/// Only the selected backend's path is read; the other may be omitted.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  pub backend:            Backend,
  /// Sheet file location; required when `backend = "sheet"`.
  pub sheet_path:         Option<PathBuf>,
  /// Document database location; required when `backend = "docs"`.
  pub docs_path:          Option<PathBuf>,
  /// Region whose numbering plan phone submissions are parsed under.
  #[serde(default = "default_region")]
  pub region:             String,
  /// argon2 PHC string for the dashboard secret; never the cleartext.
  pub auth_password_hash: String,
}

fn default_region() -> String { "BR".to_owned() }

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: RegistrationStore> {
  pub store:  Arc<S>,
  pub gate:   Arc<dyn CredentialCheck>,
  pub region: country::Id,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the registration service.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/registrations",       post(handlers::register::handler::<S>))
    .route("/login",               post(handlers::login::handler::<S>))
    .route("/participants",        get(handlers::participants::handler::<S>))
    .route("/reports/{group_key}", get(handlers::reports::handler::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
