//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rolodex_core::{
  contact::{Contact, ContactFilter, ContactId, NewContact},
  store::ContactStore,
};
use rusqlite::{OptionalExtension as _, functions::FunctionFlags};

use crate::{
  Error, Result,
  encode::{CONTACT_COLUMNS, RawContact, encode_date},
  schema::{MIGRATIONS, PRAGMAS, SCHEMA_VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Rolodex contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The schema
/// is not touched on open; call [`SqliteStore::migrate`] once at startup.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a database file at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.configure().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.configure().await?;
    Ok(store)
  }

  async fn configure(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        register_casefold(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Current value of `PRAGMA user_version`.
  pub async fn schema_version(&self) -> Result<u32> {
    let version = self
      .conn
      .call(|conn| Ok(conn.query_row("PRAGMA user_version", [], |r| r.get(0))?))
      .await?;
    Ok(version)
  }

  /// Bring the schema up to date. Idempotent: migrations already recorded in
  /// `user_version` are skipped. Returns the number of migrations applied.
  pub async fn migrate(&self) -> Result<u32> {
    let found = self.schema_version().await?;
    if found > SCHEMA_VERSION {
      return Err(Error::SchemaTooNew { found, supported: SCHEMA_VERSION });
    }
    if found == SCHEMA_VERSION {
      tracing::debug!(version = found, "schema is up to date");
      return Ok(0);
    }

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        for (i, sql) in MIGRATIONS.iter().enumerate().skip(found as usize) {
          tx.execute_batch(sql)?;
          tx.pragma_update(None, "user_version", i as u32 + 1)?;
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::info!(from = found, to = SCHEMA_VERSION, "schema migrated");
    Ok(SCHEMA_VERSION - found)
  }
}

/// Register `casefold(text)`, a Unicode-aware lowercase. SQLite's built-in
/// `lower()` only folds ASCII letters.
fn register_casefold(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    "casefold",
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| Ok(ctx.get::<Option<String>>(0)?.map(|s| s.to_lowercase())),
  )
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewContact) -> Result<Contact> {
    let email = input.email.clone();
    let row = input.clone();

    let id: ContactId = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO contacts (
             first_name, last_name, email, phone_number, birthday, additional_info
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
           RETURNING id",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.email,
            row.phone_number,
            encode_date(row.birthday),
            row.additional_info,
          ],
          |r| r.get(0),
        )?)
      })
      .await
      .map_err(|e| Error::from_write(e, &email))?;

    Ok(input.with_id(id))
  }

  async fn get(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
              rusqlite::params![id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn update(&self, id: ContactId, input: NewContact) -> Result<Option<Contact>> {
    let email = input.email.clone();

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "UPDATE contacts SET
                   first_name      = ?2,
                   last_name       = ?3,
                   email           = ?4,
                   phone_number    = ?5,
                   birthday        = ?6,
                   additional_info = ?7
                 WHERE id = ?1
                 RETURNING {CONTACT_COLUMNS}"
              ),
              rusqlite::params![
                id,
                input.first_name,
                input.last_name,
                input.email,
                input.phone_number,
                encode_date(input.birthday),
                input.additional_info,
              ],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(|e| Error::from_write(e, &email))?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn delete(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("DELETE FROM contacts WHERE id = ?1 RETURNING {CONTACT_COLUMNS}"),
              rusqlite::params![id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list(&self, filter: &ContactFilter) -> Result<Vec<Contact>> {
    let ContactFilter { first_name, last_name, email } = filter.clone().normalized();

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        // `instr` rather than LIKE so `%` and `_` in user input match literally.
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS}
           FROM contacts
           WHERE (?1 IS NULL OR instr(casefold(first_name), casefold(?1)) > 0)
             AND (?2 IS NULL OR instr(casefold(last_name),  casefold(?2)) > 0)
             AND (?3 IS NULL OR instr(casefold(email),      casefold(?3)) > 0)
           ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(
            rusqlite::params![first_name, last_name, email],
            RawContact::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn ping(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.query_row("SELECT 1", [], |r| r.get::<_, i64>(0))?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
