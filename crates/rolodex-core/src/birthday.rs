//! The upcoming-birthdays window.
//!
//! A [`BirthdayWindow`] covers the inclusive span from a start date through
//! [`WINDOW_DAYS`] days later. Membership compares only the `(month, day)` of a
//! birthday against the window boundaries on the annual cycle, so a window
//! opened on 28 December reaches into the following January.
//!
//! # Leap days
//!
//! A 29 February birthday is observed on 28 February whenever the February
//! covered by the window falls in a common year. A window that touches February
//! never crosses New Year, so that year is always the start year.

use chrono::{Datelike, Days, NaiveDate};

use crate::contact::Contact;

/// Length of the window past its start date, in days.
pub const WINDOW_DAYS: u64 = 7;

/// An inclusive `start ..= start + WINDOW_DAYS` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
  start: NaiveDate,
  end:   NaiveDate,
}

impl BirthdayWindow {
  /// Open the window on `today`.
  pub fn starting(today: NaiveDate) -> Self {
    let end = today
      .checked_add_days(Days::new(WINDOW_DAYS))
      .unwrap_or(NaiveDate::MAX);
    Self { start: today, end }
  }

  pub fn start(&self) -> NaiveDate { self.start }

  pub fn end(&self) -> NaiveDate { self.end }

  /// Whether the window crosses from December into January.
  pub fn wraps_year(&self) -> bool { self.start.month() == 12 && self.end.month() == 1 }

  /// Whether a birthday falls inside the window, ignoring its year.
  pub fn contains(&self, birthday: NaiveDate) -> bool {
    let (m1, d1) = (self.start.month(), self.start.day());
    let (m2, d2) = (self.end.month(), self.end.day());
    let (bm, bd) = self.observed(birthday);

    if m1 == m2 {
      bm == m1 && (d1..=d2).contains(&bd)
    } else {
      // Covers both the month-boundary and the December/January case: the
      // window spans exactly two months, `m1` then `m2`.
      (bm == m1 && bd >= d1) || (bm == m2 && bd <= d2)
    }
  }

  /// Keep the contacts whose birthday falls inside the window, in input order.
  pub fn select(&self, contacts: impl IntoIterator<Item = Contact>) -> Vec<Contact> {
    contacts
      .into_iter()
      .filter(|c| self.contains(c.birthday))
      .collect()
  }

  /// The `(month, day)` a birthday is celebrated on during this window.
  fn observed(&self, birthday: NaiveDate) -> (u32, u32) {
    match (birthday.month(), birthday.day()) {
      (2, 29) if !is_leap_year(self.start.year()) => (2, 28),
      md => md,
    }
  }
}

fn is_leap_year(year: i32) -> bool { NaiveDate::from_ymd_opt(year, 2, 29).is_some() }

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

  fn contact(id: i64, birthday: NaiveDate) -> Contact {
    Contact {
      id,
      first_name: format!("first{id}"),
      last_name: format!("last{id}"),
      email: format!("c{id}@example.com"),
      phone_number: None,
      birthday,
      additional_info: None,
    }
  }

  #[test]
  fn end_is_seven_days_after_start() {
    let w = BirthdayWindow::starting(date(2024, 12, 28));
    assert_eq!(w.end(), date(2025, 1, 4));
    assert!(w.wraps_year());

    let w = BirthdayWindow::starting(date(2024, 6, 1));
    assert_eq!(w.end(), date(2024, 6, 8));
    assert!(!w.wraps_year());
  }

  #[test]
  fn bounds_are_inclusive_within_a_month() {
    let w = BirthdayWindow::starting(date(2024, 6, 1));
    assert!(w.contains(date(1990, 6, 1)));
    assert!(w.contains(date(1985, 6, 8)));
    assert!(w.contains(date(2001, 6, 4)));
    assert!(!w.contains(date(1990, 6, 9)));
    assert!(!w.contains(date(1990, 5, 31)));
  }

  #[test]
  fn same_day_in_other_months_does_not_match() {
    let w = BirthdayWindow::starting(date(2024, 6, 1));
    assert!(!w.contains(date(1990, 7, 3)));
    assert!(!w.contains(date(1990, 1, 1)));
    assert!(!w.contains(date(1990, 12, 31)));
  }

  #[test]
  fn window_across_a_month_boundary() {
    // 2024-11-27 ..= 2024-12-04
    let w = BirthdayWindow::starting(date(2024, 11, 27));
    assert!(w.contains(date(1970, 11, 27)));
    assert!(w.contains(date(1970, 11, 30)));
    assert!(w.contains(date(1970, 12, 1)));
    assert!(w.contains(date(1970, 12, 4)));
    assert!(!w.contains(date(1970, 12, 5)));
    assert!(!w.contains(date(1970, 11, 26)));
    // Days that would match under a per-field comparison but are out of range.
    assert!(!w.contains(date(1970, 10, 28)));
    assert!(!w.contains(date(1970, 1, 2)));
  }

  #[test]
  fn window_wraps_into_january() {
    let w = BirthdayWindow::starting(date(2024, 12, 28));
    assert!(w.contains(date(1999, 12, 30)));
    assert!(w.contains(date(1999, 12, 28)));
    assert!(w.contains(date(1999, 12, 31)));
    assert!(w.contains(date(2000, 1, 2)));
    assert!(w.contains(date(2000, 1, 4)));
    assert!(!w.contains(date(2000, 1, 5)));
    assert!(!w.contains(date(1999, 12, 27)));
    assert!(!w.contains(date(1999, 6, 30)));
    assert!(!w.contains(date(1999, 2, 1)));
  }

  #[test]
  fn leap_day_observed_on_feb_28_in_common_years() {
    let leap_birthday = date(2000, 2, 29);

    assert!(BirthdayWindow::starting(date(2023, 2, 25)).contains(leap_birthday));
    assert!(BirthdayWindow::starting(date(2023, 2, 28)).contains(leap_birthday));
    assert!(BirthdayWindow::starting(date(2023, 2, 21)).contains(leap_birthday));
    assert!(!BirthdayWindow::starting(date(2023, 3, 1)).contains(leap_birthday));
    assert!(!BirthdayWindow::starting(date(2023, 2, 20)).contains(leap_birthday));
  }

  #[test]
  fn leap_day_matches_as_is_in_leap_years() {
    let leap_birthday = date(2000, 2, 29);

    assert!(BirthdayWindow::starting(date(2024, 2, 25)).contains(leap_birthday));
    assert!(BirthdayWindow::starting(date(2024, 2, 29)).contains(leap_birthday));
    assert!(BirthdayWindow::starting(date(2024, 2, 22)).contains(leap_birthday));
    assert!(!BirthdayWindow::starting(date(2024, 2, 21)).contains(leap_birthday));
    assert!(!BirthdayWindow::starting(date(2024, 3, 1)).contains(leap_birthday));
  }

  #[test]
  fn select_keeps_input_order() {
    let w = BirthdayWindow::starting(date(2024, 12, 28));
    let picked = w.select(vec![
      contact(1, date(1990, 1, 2)),
      contact(2, date(1990, 1, 5)),
      contact(3, date(1990, 12, 30)),
      contact(4, date(1990, 12, 27)),
    ]);
    let ids: Vec<_> = picked.iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 3]);
  }
}
