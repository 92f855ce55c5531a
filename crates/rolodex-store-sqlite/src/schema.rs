//! SQL schema for the Rolodex SQLite store.
//!
//! Migrations are applied in order by [`SqliteStore::migrate`] and gated on
//! `PRAGMA user_version`: migration `i` moves the schema to version `i + 1`.
//!
//! [`SqliteStore::migrate`]: crate::SqliteStore::migrate

/// Connection-level settings applied on open.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 5000;
";

/// Ordered schema migrations.
pub const MIGRATIONS: &[&str] = &[
  // 1: contacts table.
  "
CREATE TABLE IF NOT EXISTS contacts (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name      TEXT NOT NULL,
    last_name       TEXT NOT NULL,
    email           TEXT NOT NULL UNIQUE COLLATE NOCASE,
    phone_number    TEXT,
    birthday        TEXT NOT NULL,   -- ISO 8601 calendar date, YYYY-MM-DD
    additional_info TEXT
);

CREATE INDEX IF NOT EXISTS contacts_first_name_idx ON contacts(first_name);
CREATE INDEX IF NOT EXISTS contacts_last_name_idx  ON contacts(last_name);
",
];

/// Schema version reached once every migration has run.
pub const SCHEMA_VERSION: u32 = MIGRATIONS.len() as u32;
