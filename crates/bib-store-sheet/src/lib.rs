//! Spreadsheet-file backend for the Bib registration store.
//!
//! Registrations live in one CSV file whose header row is the field schema.
//! An append becomes a new row. File access runs through
//! [`tokio::task::spawn_blocking`] so the async runtime never blocks on disk.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SheetStore;
