// backend/src/web/forms.rs

//! Turns a multipart profile edit into typed text fields plus at most one file.

use actix_multipart::{Field, Multipart, MultipartError};
use futures_util::StreamExt as _;
use tracing::{debug, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::models::user_details::ProfileForm;
use crate::services::upload_store::{IncomingFile, UploadStore};

/// Upper bound for a single text part.
pub const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

#[derive(Debug, Default)]
pub struct ProfileSubmission {
  pub form: ProfileForm,
  pub file: Option<IncomingFile>,
}

/// Reads every part of `payload`.
///
/// Only a named file under the upload store's field name is kept; files under
/// other names, or sent without a filename, are drained and dropped. A second
/// file under the upload field, an oversized part, a non-UTF-8 text part, or a
/// malformed body is an `AppError::Upload`.
#[instrument(name = "forms::read_profile_submission", skip_all, err(Display))]
pub async fn read_profile_submission(mut payload: Multipart, uploads: &UploadStore) -> AppResult<ProfileSubmission> {
  let mut submission = ProfileSubmission::default();

  while let Some(item) = payload.next().await {
    let mut field = item.map_err(multipart_error)?;
    let disposition = field.content_disposition().clone();
    let name = disposition.get_name().unwrap_or_default().to_string();

    match disposition.get_filename() {
      // An empty file input still sends a part, with `filename=""`.
      Some(original_name) if name == uploads.field_name() && !original_name.is_empty() => {
        if submission.file.is_some() {
          return Err(AppError::Upload(format!("Unexpected field: {}", name)));
        }
        let bytes = read_field(&mut field, uploads.max_bytes(), "File too large").await?;
        debug!(field = %name, size = bytes.len(), "Received upload part.");
        submission.file = Some(IncomingFile {
          field_name: name,
          original_name: original_name.to_string(),
          bytes,
        });
      }
      Some(_) => {
        debug!(field = %name, "Ignoring file part that is not an upload.");
        drain_field(&mut field).await?;
      }
      None => {
        let bytes = read_field(&mut field, MAX_TEXT_FIELD_BYTES, "Field value too long").await?;
        let value =
          String::from_utf8(bytes).map_err(|_| AppError::Upload(format!("Field '{}' is not valid UTF-8", name)))?;
        if !submission.form.set_field(&name, value) {
          debug!(field = %name, "Ignoring unknown text field.");
        }
      }
    }
  }

  Ok(submission)
}

async fn read_field(field: &mut Field, limit: usize, over_limit: &str) -> AppResult<Vec<u8>> {
  let mut buf = Vec::new();
  while let Some(chunk) = field.next().await {
    let chunk = chunk.map_err(multipart_error)?;
    if buf.len() + chunk.len() > limit {
      return Err(AppError::Upload(over_limit.to_string()));
    }
    buf.extend_from_slice(&chunk);
  }
  Ok(buf)
}

async fn drain_field(field: &mut Field) -> AppResult<()> {
  while let Some(chunk) = field.next().await {
    chunk.map_err(multipart_error)?;
  }
  Ok(())
}

fn multipart_error(e: MultipartError) -> AppError {
  AppError::Upload(e.to_string())
}
