//! Bearer-secret session extractor and the argon2 credential check.
//!
//! Dashboard callers present the shared secret as `Authorization: Bearer
//! <secret>`. Extraction is infallible: a missing or wrong secret yields an
//! anonymous [`Session`], and each gated handler decides by calling
//! [`require`] before touching the store.

use std::convert::Infallible;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use bib_core::{
  auth::{CredentialCheck, Session},
  store::RegistrationStore,
};

use crate::{AppState, error::ApiError};

// ─── Credential check ────────────────────────────────────────────────────────

/// Shared-secret check against an argon2 PHC string.
///
/// Only the hash is ever held in memory or configuration; the cleartext
/// secret exists only inside a request.
#[derive(Clone)]
pub struct ArgonCheck {
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  password_hash: String,
}

impl ArgonCheck {
  pub fn new(password_hash: impl Into<String>) -> Self {
    Self { password_hash: password_hash.into() }
  }
}

impl CredentialCheck for ArgonCheck {
  fn check(&self, secret: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
      return false;
    };
    Argon2::default()
      .verify_password(secret.as_bytes(), &parsed)
      .is_ok()
  }
}

// ─── Session extraction ──────────────────────────────────────────────────────

/// The caller's [`Session`], built from the `Authorization` header.
pub struct DashboardSession(pub Session);

/// Fail with [`ApiError::Unauthorized`] unless `session` passed the gate.
pub fn require(session: Session) -> Result<(), ApiError> {
  if session.is_authenticated() {
    Ok(())
  } else {
    Err(ApiError::Unauthorized)
  }
}

fn bearer_secret(headers: &HeaderMap) -> Option<&str> {
  headers
    .get(header::AUTHORIZATION)?
    .to_str()
    .ok()?
    .strip_prefix("Bearer ")
}

pub fn session_from_headers(
  headers: &HeaderMap,
  gate: &dyn CredentialCheck,
) -> Session {
  match bearer_secret(headers) {
    Some(secret) => Session::open(gate, secret),
    None => Session::anonymous(),
  }
}

impl<S> FromRequestParts<AppState<S>> for DashboardSession
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  type Rejection = Infallible;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    Ok(Self(session_from_headers(&parts.headers, state.gate.as_ref())))
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
  use axum::http::{Request, header};
  use bib_core::registration::{NewRegistration, Registration};
  use phonenumber::country;
  use rand_core::OsRng;

  use super::*;
  use crate::AppState;

  // A minimal no-op store for testing auth only.
  #[derive(Clone)]
  struct NoopStore;

  #[derive(Debug, thiserror::Error)]
  #[error("noop")]
  struct NoopError;

  impl RegistrationStore for NoopStore {
    type Error = NoopError;
    async fn append(
      &self,
      _: NewRegistration,
    ) -> Result<Registration, Self::Error> {
      unimplemented!()
    }
    async fn list_all(&self) -> Result<Vec<Registration>, Self::Error> {
      unimplemented!()
    }
  }

  fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string()
  }

  fn make_state(password: &str) -> AppState<NoopStore> {
    AppState {
      store:  Arc::new(NoopStore),
      gate:   Arc::new(ArgonCheck::new(hash(password))),
      region: country::Id::BR,
    }
  }

  async fn extract(
    req: Request<axum::body::Body>,
    state: &AppState<NoopStore>,
  ) -> Session {
    let (mut parts, _) = req.into_parts();
    let DashboardSession(session) =
      DashboardSession::from_request_parts(&mut parts, state)
        .await
        .unwrap();
    session
  }

  #[tokio::test]
  async fn correct_secret_authenticates() {
    let state = make_state("corrida");
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Bearer corrida")
      .body(axum::body::Body::empty())
      .unwrap();
    let session = extract(req, &state).await;
    assert!(session.is_authenticated());
    assert!(require(session).is_ok());
  }

  #[tokio::test]
  async fn wrong_secret_stays_anonymous() {
    let state = make_state("corrida");
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Bearer wrong")
      .body(axum::body::Body::empty())
      .unwrap();
    let session = extract(req, &state).await;
    assert!(!session.is_authenticated());
    assert!(matches!(require(session), Err(ApiError::Unauthorized)));
  }

  #[tokio::test]
  async fn missing_header_stays_anonymous() {
    let state = make_state("corrida");
    let req = Request::builder().body(axum::body::Body::empty()).unwrap();
    assert!(!extract(req, &state).await.is_authenticated());
  }

  #[tokio::test]
  async fn non_bearer_scheme_stays_anonymous() {
    let state = make_state("corrida");
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Basic Y29ycmlkYQ==")
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(!extract(req, &state).await.is_authenticated());
  }

  #[test]
  fn malformed_hash_never_verifies() {
    let gate = ArgonCheck::new("not-a-phc-string");
    assert!(!gate.check("corrida"));
  }
}
