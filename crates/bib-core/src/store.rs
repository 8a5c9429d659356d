//! The `RegistrationStore` trait.
//!
//! The trait is implemented by storage backends (`bib-store-sheet`,
//! `bib-store-docs`). Higher layers depend on this abstraction, not on any
//! concrete backend; picking a backend is a deployment-time concern.

use std::future::Future;

use crate::registration::{NewRegistration, Registration};

/// Abstraction over a durable registration store.
///
/// The store is append-only: records are written once and never updated or
/// deleted. `created_at` is assigned by the store at write time, which is why
/// `append` takes a [`NewRegistration`] and returns the completed
/// [`Registration`].
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RegistrationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append one record. Either every field lands or none does; a failed
  /// append leaves the store observably unchanged.
  fn append(
    &self,
    input: NewRegistration,
  ) -> impl Future<Output = Result<Registration, Self::Error>> + Send + '_;

  /// Return every stored record in backend-native (insertion) order.
  ///
  /// A read failure is an error, never an empty list, so callers can tell
  /// "no registrations yet" from "backend unreachable".
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Registration>, Self::Error>> + Send + '_;
}
