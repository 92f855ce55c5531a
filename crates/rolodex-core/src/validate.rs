//! Input validation applied before any store access.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
  Error, Result,
  contact::{ContactId, NewContact},
};

pub const MAX_NAME_LEN: usize = 150;
pub const MAX_EMAIL_LEN: usize = 150;
pub const MAX_PHONE_LEN: usize = 50;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-z0-9._%+-]{1,64}@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$")
    .expect("email pattern is valid")
});

/// Whether `email` is syntactically an email address.
pub fn is_valid_email(email: &str) -> bool {
  email.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(email)
}

/// Reject non-positive ids.
pub fn contact_id(id: ContactId) -> Result<ContactId> {
  if id < 1 {
    return Err(Error::invalid("id", format!("must be >= 1, got {id}")));
  }
  Ok(id)
}

fn required(field: &'static str, value: &str, max: usize) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::invalid(field, "must not be empty"));
  }
  if value.chars().count() > max {
    return Err(Error::invalid(field, format!("must be at most {max} characters")));
  }
  Ok(())
}

impl NewContact {
  /// Check field shapes and lengths.
  pub fn validate(&self) -> Result<()> {
    required("first_name", &self.first_name, MAX_NAME_LEN)?;
    required("last_name", &self.last_name, MAX_NAME_LEN)?;

    if !is_valid_email(&self.email) {
      return Err(Error::invalid("email", format!("{:?} is not a valid email address", self.email)));
    }

    if let Some(phone) = &self.phone_number
      && phone.chars().count() > MAX_PHONE_LEN
    {
      return Err(Error::invalid(
        "phone_number",
        format!("must be at most {MAX_PHONE_LEN} characters"),
      ));
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn input(email: &str) -> NewContact {
    NewContact {
      first_name:      "Grace".into(),
      last_name:       "Hopper".into(),
      email:           email.into(),
      phone_number:    None,
      birthday:        NaiveDate::from_ymd_opt(1906, 12, 9).unwrap(),
      additional_info: None,
    }
  }

  #[test]
  fn accepts_ordinary_addresses() {
    for email in ["grace@navy.mil", "g.hopper+cobol@example.co.uk", "a_b-c@sub-domain.example.org"] {
      assert!(is_valid_email(email), "{email}");
    }
  }

  #[test]
  fn rejects_malformed_addresses() {
    for email in ["", "grace", "grace@", "@navy.mil", "grace@navy", "gr ace@navy.mil", "grace@-navy.mil"] {
      assert!(!is_valid_email(email), "{email}");
    }
  }

  #[test]
  fn validate_reports_the_offending_field() {
    let err = input("not-an-email").validate().unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "email", .. }));

    let mut blank = input("grace@navy.mil");
    blank.last_name = "   ".into();
    let err = blank.validate().unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "last_name", .. }));
  }

  #[test]
  fn validate_enforces_lengths() {
    let mut long = input("grace@navy.mil");
    long.first_name = "x".repeat(MAX_NAME_LEN + 1);
    assert!(long.validate().is_err());

    let mut phone = input("grace@navy.mil");
    phone.phone_number = Some("1".repeat(MAX_PHONE_LEN + 1));
    assert!(matches!(
      phone.validate().unwrap_err(),
      Error::Invalid { field: "phone_number", .. }
    ));

    assert!(input("grace@navy.mil").validate().is_ok());
  }

  #[test]
  fn contact_id_must_be_positive() {
    assert_eq!(contact_id(1), Ok(1));
    assert!(contact_id(0).is_err());
    assert!(contact_id(-4).is_err());
  }
}
