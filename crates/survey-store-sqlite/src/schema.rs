//! SQL schema for the survey SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS survey_forms (
    survey_id      TEXT PRIMARY KEY,  -- 24 lowercase hex chars
    title          TEXT NOT NULL,
    description    TEXT NOT NULL,
    questions_json TEXT NOT NULL DEFAULT '[]',  -- ordered JSON array
    created_by     TEXT NOT NULL,     -- written once on insert
    created_at     TEXT NOT NULL,     -- ISO 8601 UTC; written once on insert
    is_active      INTEGER NOT NULL   -- 0 | 1
);

PRAGMA user_version = 1;
";
