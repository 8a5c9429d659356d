//! [`SheetStore`] — the CSV-file implementation of [`RegistrationStore`].

use std::{
  fs::OpenOptions,
  io::Write as _,
  path::{Path, PathBuf},
  sync::Arc,
};

use bib_core::{
  registration::{NewRegistration, Registration},
  store::RegistrationStore,
};
use chrono::Utc;

use crate::{
  Result,
  encode::{decode_row, encode_row},
  schema::{HEADER, check_header},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A registration sheet backed by a single CSV file.
///
/// Cloning is cheap; clones share the same file and the same write lock.
#[derive(Debug, Clone)]
pub struct SheetStore {
  path: Arc<PathBuf>,
  /// Serializes appends and whole-file reads. This is the sheet service's
  /// own write ordering, in file form.
  lock: Arc<tokio::sync::Mutex<()>>,
}

impl SheetStore {
  /// Open (or create) the sheet at `path`.
  ///
  /// A new or empty file gets the header row written; an existing file has
  /// its header checked against the expected schema.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self {
      path: Arc::new(path.as_ref().to_path_buf()),
      lock: Arc::new(tokio::sync::Mutex::new(())),
    };
    store.run_blocking(init_sheet).await?;
    Ok(store)
  }

  /// Run one file operation on the blocking pool, holding the write lock
  /// for its duration.
  async fn run_blocking<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Path) -> Result<T> + Send + 'static,
    T: Send + 'static,
  {
    let _guard = self.lock.lock().await;
    let path = Arc::clone(&self.path);
    tokio::task::spawn_blocking(move || f(&path)).await?
  }
}

impl RegistrationStore for SheetStore {
  type Error = crate::Error;

  async fn append(&self, input: NewRegistration) -> Result<Registration> {
    let stored = input.into_stored(Utc::now());
    let row = encode_row(&stored);
    self.run_blocking(move |path| append_row(path, &row)).await?;
    Ok(stored)
  }

  async fn list_all(&self) -> Result<Vec<Registration>> {
    self.run_blocking(read_all).await
  }
}

// ─── File operations ─────────────────────────────────────────────────────────

fn init_sheet(path: &Path) -> Result<()> {
  match std::fs::metadata(path) {
    Ok(meta) if meta.len() > 0 => {
      let mut rdr = csv::Reader::from_path(path)?;
      check_header(rdr.headers()?)?;
      Ok(())
    }
    _ => {
      let mut buf = Vec::new();
      {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        wtr.write_record(HEADER)?;
        wtr.flush()?;
      }
      let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
      file.write_all(&buf)?;
      Ok(())
    }
  }
}

fn append_row(path: &Path, row: &[String; 7]) -> Result<()> {
  // Build the complete line in memory first so the row lands in a single
  // append write, never a torn prefix.
  let mut buf = Vec::new();
  {
    let mut wtr = csv::Writer::from_writer(&mut buf);
    wtr.write_record(row)?;
    wtr.flush()?;
  }
  let mut file = OpenOptions::new().append(true).open(path)?;
  file.write_all(&buf)?;
  Ok(())
}

fn read_all(path: &Path) -> Result<Vec<Registration>> {
  let mut rdr = csv::Reader::from_path(path)?;
  check_header(rdr.headers()?)?;
  let mut records = Vec::new();
  for (idx, row) in rdr.records().enumerate() {
    // line 1 is the header row
    records.push(decode_row(idx as u64 + 2, &row?)?);
  }
  Ok(records)
}
