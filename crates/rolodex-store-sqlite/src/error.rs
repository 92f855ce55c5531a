//! Error type for `rolodex-store-sqlite`.

use rolodex_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Another contact already owns this email.
  #[error("email already exists: {0}")]
  DuplicateEmail(String),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// The database was written by a newer build than this one.
  #[error("schema version {found} is newer than supported version {supported}")]
  SchemaTooNew { found: u32, supported: u32 },
}

impl StoreError for Error {
  fn duplicate_email(&self) -> Option<&str> {
    match self {
      Error::DuplicateEmail(email) => Some(email),
      _ => None,
    }
  }
}

impl Error {
  /// Translate a unique-index violation on `contacts.email` into
  /// [`Error::DuplicateEmail`]; pass anything else through.
  pub(crate) fn from_write(err: tokio_rusqlite::Error, email: &str) -> Self {
    if is_email_conflict(&err) {
      Error::DuplicateEmail(email.to_owned())
    } else {
      Error::Database(err)
    }
  }
}

fn is_email_conflict(err: &tokio_rusqlite::Error) -> bool {
  match err {
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, msg)) => {
      e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        && msg.as_deref().is_some_and(|m| m.contains("contacts.email"))
    }
    _ => false,
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
