//! Domain types and contracts for the Bib race-registration service.
//!
//! Validation, phone normalization, aggregation, and the storage and
//! credential traits all live here, free of HTTP and database dependencies.
//! The server and the storage backends depend on this crate, never the
//! other way around.

// Backend impls write the store trait's methods as native `async fn`;
// suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod aggregate;
pub mod auth;
pub mod error;
pub mod phone;
pub mod pipeline;
pub mod registration;
pub mod store;
pub mod validate;

pub use error::{PhoneError, RegistrationError, RejectionReason};
