//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rolodex_core::store::StoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Validation(#[from] rolodex_core::Error),

  /// The request could not be decoded into the handler's inputs.
  #[error("{message}")]
  Rejected {
    status:  StatusCode,
    message: String,
  },

  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  /// The store could not be reached at all.
  #[error("store unavailable: {0}")]
  Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a backend failure: duplicate emails become
  /// [`ApiError::Conflict`], everything else is a server fault.
  pub fn store<E: StoreError>(err: E) -> Self {
    match err.duplicate_email() {
      Some(email) => ApiError::Conflict(format!("contact with email {email} already exists")),
      None => ApiError::Store(Box::new(err)),
    }
  }
}

macro_rules! impl_from_rejection {
  ($($rejection:ty),*) => {$(
    impl From<$rejection> for ApiError {
      fn from(rejection: $rejection) -> Self {
        ApiError::Rejected {
          status:  rejection.status(),
          message: rejection.body_text(),
        }
      }
    }
  )*};
}

impl_from_rejection!(JsonRejection, PathRejection, QueryRejection);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
      ApiError::Rejected { status, message } => (*status, message.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unavailable(e) => {
        tracing::error!(error = %e, "store unavailable");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "error connecting to the database".to_owned(),
        )
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store error");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal store error".to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
