//! Contact records and the query type used to list them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned identity of a contact. Always `>= 1`.
pub type ContactId = i64;

/// A persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:              ContactId,
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub phone_number:    Option<String>,
  /// Only the month and day matter for the upcoming-birthdays view.
  pub birthday:        NaiveDate,
  pub additional_info: Option<String>,
}

/// The mutable fields of a contact, as accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  #[serde(default)]
  pub phone_number:    Option<String>,
  pub birthday:        NaiveDate,
  #[serde(default)]
  pub additional_info: Option<String>,
}

impl NewContact {
  /// Attach a store-assigned id.
  pub fn with_id(self, id: ContactId) -> Contact {
    Contact {
      id,
      first_name: self.first_name,
      last_name: self.last_name,
      email: self.email,
      phone_number: self.phone_number,
      birthday: self.birthday,
      additional_info: self.additional_info,
    }
  }
}

/// Parameters for [`ContactStore::list`](crate::store::ContactStore::list).
///
/// Each present filter is a case-insensitive substring match; filters are
/// combined with AND. Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactFilter {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
}

impl ContactFilter {
  /// Drop empty filter values so they impose no constraint.
  pub fn normalized(self) -> Self {
    fn keep(v: Option<String>) -> Option<String> { v.filter(|s| !s.is_empty()) }
    Self {
      first_name: keep(self.first_name),
      last_name:  keep(self.last_name),
      email:      keep(self.email),
    }
  }
}
