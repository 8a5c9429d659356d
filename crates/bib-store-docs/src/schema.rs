//! SQL schema for the Bib document store.
//!
//! Applied on every open; `CREATE TABLE IF NOT EXISTS` keeps that idempotent,
//! and `PRAGMA user_version` stamps the layout so a later version can gate
//! migrations on it.

/// Schema DDL, run in one batch at connection startup.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per registration document. Strictly append-only:
-- no UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS registrations (
    doc_id     TEXT PRIMARY KEY,
    body       TEXT NOT NULL,   -- JSON document of the form fields
    created_at TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS registrations_created_idx
    ON registrations(created_at);

PRAGMA user_version = 1;
";
