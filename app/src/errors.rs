// app/src/errors.rs

use crate::web::dto::CheckoutLineView;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use canteen::CanteenError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error(transparent)]
  Canteen(#[from] CanteenError),

  /// A checkout stopped part-way; `lines` says which lines were placed.
  #[error("{message}")]
  PartialCheckout {
    status: StatusCode,
    message: String,
    lines: Vec<CheckoutLineView>,
  },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

/// HTTP status used when relaying a client-side failure to the browser.
pub fn status_for(err: &CanteenError) -> StatusCode {
  match err {
    CanteenError::Validation(_) => StatusCode::BAD_REQUEST,
    CanteenError::Unauthenticated => StatusCode::UNAUTHORIZED,
    CanteenError::Http { status, .. } => StatusCode::from_u16(*status)
      .ok()
      .filter(|s| s.is_client_error() || s.is_server_error())
      .unwrap_or(StatusCode::BAD_GATEWAY),
    CanteenError::Transport { .. } => StatusCode::BAD_GATEWAY,
    CanteenError::CheckoutInProgress => StatusCode::CONFLICT,
    CanteenError::Decode { .. } | CanteenError::SessionStorage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Canteen(e) => status_for(e),
      AppError::PartialCheckout { status, .. } => *status,
      AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }
    let body = match self {
      AppError::Canteen(e) => json!({ "error": e.user_message() }),
      AppError::PartialCheckout { message, lines, .. } => json!({ "error": message, "lines": lines }),
      AppError::Config(_) | AppError::Internal(_) => json!({ "error": "An internal error occurred" }),
    };
    HttpResponse::build(status).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
