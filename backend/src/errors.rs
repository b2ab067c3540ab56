// backend/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::flow::FlowError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Multipart parsing or file write failed while handling an upload.
  #[error("{0}")]
  Upload(String),

  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Persistence Error: {0}")]
  Persistence(String),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<sqlx::Error>() {
      Ok(sqlx_err) => AppError::Sqlx(sqlx_err),
      Err(other) => AppError::Internal(other.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      // Upload failures surface the underlying message as-is.
      AppError::Upload(m) => HttpResponse::UnprocessableEntity().json(json!({"error": m})),
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Conflict(m) => HttpResponse::Conflict().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Persistence(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Storage operation failed", "detail": m}))
      }
      AppError::Workflow { source } => {
        tracing::error!(flow_error_source = ?source, "Workflow error details");
        HttpResponse::InternalServerError()
          .json(json!({"error": "Workflow processing error", "detail": source.to_string()}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn upload_errors_map_to_unprocessable_entity() {
    let err = AppError::Upload("File too large".to_string());
    assert_eq!(err.to_string(), "File too large");
    assert_eq!(err.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[test]
  fn status_codes_follow_error_kind() {
    assert_eq!(AppError::NotFound("x".into()).error_response().status(), StatusCode::NOT_FOUND);
    assert_eq!(AppError::Conflict("x".into()).error_response().status(), StatusCode::CONFLICT);
    assert_eq!(AppError::Validation("x".into()).error_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(
      AppError::Persistence("x".into()).error_response().status(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn anyhow_wrapping_sqlx_keeps_database_kind() {
    let err: AppError = anyhow::Error::new(sqlx::Error::RowNotFound).into();
    assert!(matches!(err, AppError::Sqlx(sqlx::Error::RowNotFound)));
  }
}
