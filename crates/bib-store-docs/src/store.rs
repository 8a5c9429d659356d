//! [`DocStore`] — the SQLite-backed document implementation of
//! [`RegistrationStore`].

use std::path::Path;

use bib_core::{
  registration::{NewRegistration, Registration},
  store::RegistrationStore,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
  Result,
  encode::{RawDoc, encode_body, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A registration document collection backed by a single SQLite file.
///
/// Clones share one reference-counted connection.
#[derive(Clone)]
pub struct DocStore {
  conn: tokio_rusqlite::Connection,
}

impl DocStore {
  /// Open the collection at `path`, creating the file and its schema on
  /// first use.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// In-memory collection, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl RegistrationStore for DocStore {
  type Error = crate::Error;

  async fn append(&self, input: NewRegistration) -> Result<Registration> {
    let created_at = Utc::now();
    let doc_id = encode_uuid(Uuid::new_v4());
    let body = encode_body(&input)?;
    let dt_str = encode_dt(created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO registrations (doc_id, body, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![doc_id, body, dt_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(input.into_stored(created_at))
  }

  async fn list_all(&self) -> Result<Vec<Registration>> {
    let raws: Vec<RawDoc> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT body, created_at FROM registrations ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawDoc { body: row.get(0)?, created_at: row.get(1)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDoc::into_registration).collect()
  }
}
