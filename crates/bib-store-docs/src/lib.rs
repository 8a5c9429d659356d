//! Document-collection backend for the Bib registration store.
//!
//! Each registration is one document: a JSON body of the form fields plus a
//! server-assigned timestamp, kept in a single SQLite table. Wraps
//! [`tokio_rusqlite`] so all database access runs on a dedicated thread pool
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::DocStore;

#[cfg(test)]
mod tests;
