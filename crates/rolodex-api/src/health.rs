//! Service identity and liveness endpoints.

use axum::{Json, extract::State};
use rolodex_core::store::ContactStore;
use serde::Serialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct Message {
  pub message: String,
}

/// `GET /` — service name and version.
pub async fn root() -> Json<Message> {
  Json(Message {
    message: format!("Application Ver {}", env!("CARGO_PKG_VERSION")),
  })
}

/// `GET /api/healthchecker` — 200 once the store answers a trivial query.
pub async fn healthchecker<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Message>, ApiError>
where
  S: ContactStore,
{
  state
    .store
    .ping()
    .await
    .map_err(|e| ApiError::Unavailable(Box::new(e)))?;
  Ok(Json(Message { message: "Welcome to Rolodex!".to_owned() }))
}
