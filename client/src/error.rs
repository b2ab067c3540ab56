// client/src/error.rs

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  /// Transport failure, or a body that could not be decoded.
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  /// The server answered with a non-success status.
  #[error("API error: {status} - {message}")]
  Api { status: u16, message: String },
}

impl ClientError {
  pub fn status(&self) -> Option<u16> {
    match self {
      ClientError::Http(e) => e.status().map(|s| s.as_u16()),
      ClientError::Api { status, .. } => Some(*status),
    }
  }
}

/// Error body produced by the backend: `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
  pub error: String,
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
