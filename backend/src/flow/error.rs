// backend/src/flow/error.rs

use thiserror::Error;

/// Failures raised by the pipeline engine itself, as opposed to its handlers.
#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },
}
