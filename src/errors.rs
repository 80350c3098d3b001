use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Application error taxonomy. Every operation converts faults into one of
/// these categories at its own boundary; nothing propagates to a caller as an
/// unstructured failure.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({
        "success": false,
        "message": m,
      })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({
        "success": false,
        "message": m,
      })),
      // The catalog-already-seeded case; reported as a 400 like any other
      // rejected request.
      AppError::Conflict(m) => HttpResponse::BadRequest().json(json!({
        "success": false,
        "message": m,
      })),
      AppError::Config(m) => HttpResponse::InternalServerError().json(json!({
        "success": false,
        "message": "Configuration issue",
        "error": m,
      })),
      AppError::Internal(m) => HttpResponse::InternalServerError().json(json!({
        "success": false,
        "message": "An internal error occurred",
        "error": m,
      })),
    }
  }
}

/// Result type alias for the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
