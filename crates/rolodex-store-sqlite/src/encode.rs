//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Birthdays are stored as `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use rolodex_core::contact::{Contact, ContactId};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column list shared by every query that yields a whole contact, in the
/// order [`RawContact::from_row`] expects.
pub const CONTACT_COLUMNS: &str =
  "id, first_name, last_name, email, phone_number, birthday, additional_info";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// A `contacts` row as read from SQLite, before date decoding.
pub struct RawContact {
  pub id:              ContactId,
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub phone_number:    Option<String>,
  pub birthday:        String,
  pub additional_info: Option<String>,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      first_name:      row.get(1)?,
      last_name:       row.get(2)?,
      email:           row.get(3)?,
      phone_number:    row.get(4)?,
      birthday:        row.get(5)?,
      additional_info: row.get(6)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:              self.id,
      first_name:      self.first_name,
      last_name:       self.last_name,
      email:           self.email,
      phone_number:    self.phone_number,
      birthday:        decode_date(&self.birthday)?,
      additional_info: self.additional_info,
    })
  }
}
