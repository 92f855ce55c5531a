//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rolodex-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  birthday::BirthdayWindow,
  contact::{Contact, ContactFilter, ContactId, NewContact},
};

/// Failure classification every backend error must expose so callers can
/// tell client mistakes from infrastructure faults.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `Some(email)` when the operation was rejected because another contact
  /// already owns `email`.
  fn duplicate_email(&self) -> Option<&str>;
}

/// Abstraction over a Rolodex contact store backend.
///
/// Every operation touches a single record in a single statement, so a
/// failed call leaves prior state untouched. Email uniqueness is enforced by
/// the backend itself, which is what serializes racing creates.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: StoreError;

  /// Persist a new contact and return it with its assigned id.
  ///
  /// Fails with a duplicate-email error if the email (compared
  /// case-insensitively) is already taken.
  fn create(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Replace every mutable field of a contact. Returns `None` if not found.
  fn update(
    &self,
    id: ContactId,
    input: NewContact,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Permanently remove a contact, returning the removed record, or `None`
  /// if it did not exist.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// List contacts matching every present filter, ordered by id.
  fn list<'a>(
    &'a self,
    filter: &'a ContactFilter,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// Round-trip a trivial query to prove the backend is reachable.
  fn ping(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Contacts whose birthday falls inside `window`, in id order.
  fn upcoming_birthdays(
    &self,
    window: BirthdayWindow,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_ {
    async move {
      let everyone = ContactFilter::default();
      let contacts = self.list(&everyone).await?;
      Ok(window.select(contacts))
    }
  }
}
