//! JSON REST API for Rolodex.
//!
//! Exposes an axum [`Router`] backed by any [`rolodex_core::store::ContactStore`].
//! TLS, tracing layers, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = rolodex_api::api_router(AppState::new(Arc::new(store)));
//! ```

pub mod contacts;
pub mod error;
pub mod extract;
pub mod health;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::NaiveDate;
use rolodex_core::store::ContactStore;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Source of "today" for the upcoming-birthdays view.
pub type Today = fn() -> NaiveDate;

/// The server's local calendar date.
pub fn local_today() -> NaiveDate { chrono::Local::now().date_naive() }

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store: Arc<S>,
  pub today: Today,
}

impl<S> AppState<S> {
  /// State that reads the date from the server's local clock.
  pub fn new(store: Arc<S>) -> Self { Self { store, today: local_today } }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
      today: self.today,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested or layered by the caller.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/", get(health::root))
    .route("/api/healthchecker", get(health::healthchecker::<S>))
    // Contacts
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route(
      "/contacts/upcoming-birthdays",
      get(contacts::upcoming_birthdays::<S>),
    )
    .route(
      "/contacts/upcoming-birthdays/",
      get(contacts::upcoming_birthdays::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
