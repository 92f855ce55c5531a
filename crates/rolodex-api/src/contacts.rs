//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Optional `first_name`, `last_name`, `email` substring filters |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `POST`   | `/contacts` | Body: [`NewContact`]; returns 201; 409 if the email exists |
//! | `PUT`    | `/contacts/:id` | Body: [`NewContact`]; full replace |
//! | `DELETE` | `/contacts/:id` | Returns the deleted contact |
//! | `GET`    | `/contacts/upcoming-birthdays/` | Birthdays in the next 7 days |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use rolodex_core::{
  birthday::BirthdayWindow,
  contact::{Contact, ContactFilter, ContactId, NewContact},
  store::ContactStore,
  validate,
};

use crate::{
  AppState,
  error::ApiError,
  extract::{JsonBody, PathParam, QueryParams},
};

fn not_found(id: ContactId) -> ApiError { ApiError::NotFound(format!("contact {id} not found")) }

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts[?first_name=...][&last_name=...][&email=...]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  QueryParams(filter): QueryParams<ContactFilter>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  tracing::debug!(?filter, "listing contacts");
  let contacts = state.store.list(&filter).await.map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  PathParam(id): PathParam<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let id = validate::contact_id(id)?;
  let contact = state
    .store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — returns 201 + the stored [`Contact`].
pub async fn create<S>(
  State(state): State<AppState<S>>,
  JsonBody(body): JsonBody<NewContact>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  body.validate()?;
  let contact = state.store.create(body).await.map_err(ApiError::store)?;
  tracing::info!(id = contact.id, "contact created");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — replaces every field except `id`.
pub async fn update_one<S>(
  State(state): State<AppState<S>>,
  PathParam(id): PathParam<ContactId>,
  JsonBody(body): JsonBody<NewContact>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let id = validate::contact_id(id)?;
  body.validate()?;
  let contact = state
    .store
    .update(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  tracing::info!(id, "contact updated");
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id` — returns the removed [`Contact`].
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  PathParam(id): PathParam<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let id = validate::contact_id(id)?;
  let contact = state
    .store
    .delete(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  tracing::info!(id, "contact deleted");
  Ok(Json(contact))
}

// ─── Upcoming birthdays ───────────────────────────────────────────────────────

/// `GET /contacts/upcoming-birthdays/` — contacts whose birthday falls
/// between today and seven days from now, inclusive.
pub async fn upcoming_birthdays<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let today = (state.today)();
  let window = BirthdayWindow::starting(today);
  tracing::debug!(
    start = %window.start(),
    end = %window.end(),
    wraps_year = window.wraps_year(),
    "selecting upcoming birthdays"
  );

  let contacts = state
    .store
    .upcoming_birthdays(window)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(contacts))
}
