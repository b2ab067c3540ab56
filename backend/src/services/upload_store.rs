// backend/src/services/upload_store.rs

//! Writes uploaded profile photos to the configured directory.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::errors::{AppError, Result as AppResult};

/// A file part received under the configured upload field, buffered in memory.
#[derive(Debug, Clone)]
pub struct IncomingFile {
  pub field_name: String,
  /// Filename as sent by the client; informational only.
  pub original_name: String,
  pub bytes: Vec<u8>,
}

/// A file written to disk for the current request. Only `stored_name`
/// outlives the request, as the profile's picture reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
  pub field_name: String,
  pub stored_name: String,
  pub destination_dir: PathBuf,
}

impl UploadedFile {
  pub fn path(&self) -> PathBuf {
    self.destination_dir.join(&self.stored_name)
  }
}

#[derive(Debug)]
pub struct UploadStore {
  config: UploadConfig,
}

impl UploadStore {
  pub fn new(config: UploadConfig) -> Self {
    Self { config }
  }

  pub fn field_name(&self) -> &str {
    &self.config.field_name
  }

  pub fn max_bytes(&self) -> usize {
    self.config.max_bytes
  }

  /// `<field>-<epochMillis>-<uuid>.jpeg`. The extension is fixed whatever the image format.
  pub fn generate_stored_name(field_name: &str) -> String {
    format!(
      "{}-{}-{}.jpeg",
      field_name,
      Utc::now().timestamp_millis(),
      Uuid::new_v4().simple()
    )
  }

  /// Persists `file` under a freshly generated name.
  ///
  /// Any I/O failure is reported as `AppError::Upload` carrying the OS message.
  #[instrument(
    name = "upload_store::save",
    skip(self, file),
    fields(field = %file.field_name, original_name = %file.original_name, size = file.bytes.len()),
    err(Display)
  )]
  pub async fn save(&self, file: &IncomingFile) -> AppResult<UploadedFile> {
    if file.bytes.len() > self.config.max_bytes {
      warn!(limit = self.config.max_bytes, "Upload exceeds size limit.");
      return Err(AppError::Upload("File too large".to_string()));
    }

    fs::create_dir_all(&self.config.dir).await.map_err(upload_io_error)?;

    let stored_name = Self::generate_stored_name(&file.field_name);
    let path = self.config.dir.join(&stored_name);
    debug!(path = %path.display(), "Writing uploaded file.");

    // create_new: never clobber an existing upload.
    let handle = fs::OpenOptions::new()
      .write(true)
      .create_new(true)
      .open(&path)
      .await
      .map_err(upload_io_error)?;
    write_or_discard(handle, &path, &file.bytes).await?;

    info!(stored_name = %stored_name, "Uploaded file stored.");
    Ok(UploadedFile {
      field_name: file.field_name.clone(),
      stored_name,
      destination_dir: self.config.dir.clone(),
    })
  }
}

/// Writes `bytes` through `writer`; on failure the file at `path` is removed
/// so no truncated upload is left behind.
async fn write_or_discard<W: AsyncWrite + Unpin>(mut writer: W, path: &Path, bytes: &[u8]) -> AppResult<()> {
  let written = async {
    writer.write_all(bytes).await?;
    writer.flush().await
  }
  .await;
  drop(writer);

  if let Err(e) = written {
    if let Err(rm_err) = fs::remove_file(path).await {
      warn!(path = %path.display(), error = %rm_err, "Failed to remove partial upload.");
    }
    return Err(upload_io_error(e));
  }
  Ok(())
}

fn upload_io_error(e: std::io::Error) -> AppError {
  AppError::Upload(e.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io;
  use std::pin::Pin;
  use std::task::{Context, Poll};

  /// Accepts nothing; every write fails like a full disk.
  struct FullDisk;

  impl AsyncWrite for FullDisk {
    fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, _buf: &[u8]) -> Poll<io::Result<usize>> {
      Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "No space left on device")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
      Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
      Poll::Ready(Ok(()))
    }
  }

  fn store_in(dir: &Path, max_bytes: usize) -> UploadStore {
    UploadStore::new(UploadConfig {
      dir: dir.to_path_buf(),
      field_name: "profilePic".to_string(),
      max_bytes,
    })
  }

  fn photo(bytes: &[u8]) -> IncomingFile {
    IncomingFile {
      field_name: "profilePic".to_string(),
      original_name: "me.png".to_string(),
      bytes: bytes.to_vec(),
    }
  }

  #[test]
  fn generated_names_follow_field_timestamp_pattern() {
    let name = UploadStore::generate_stored_name("profilePic");
    assert!(name.starts_with("profilePic-"));
    assert!(name.ends_with(".jpeg"));

    let middle = &name["profilePic-".len()..name.len() - ".jpeg".len()];
    let (millis, token) = middle.split_once('-').unwrap();
    assert!(millis.parse::<i64>().unwrap() > 0);
    assert_eq!(token.len(), 32);
  }

  #[test]
  fn names_generated_in_the_same_millisecond_differ() {
    let names: std::collections::HashSet<String> =
      (0..64).map(|_| UploadStore::generate_stored_name("profilePic")).collect();
    assert_eq!(names.len(), 64);
  }

  #[tokio::test]
  async fn save_writes_bytes_and_creates_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("uploads");
    let store = store_in(&dir, 1024);

    let uploaded = store.save(&photo(b"\xff\xd8jpeg-bytes")).await.unwrap();

    assert_eq!(uploaded.field_name, "profilePic");
    assert_eq!(uploaded.destination_dir, dir);
    let written = std::fs::read(uploaded.path()).unwrap();
    assert_eq!(written, b"\xff\xd8jpeg-bytes");
  }

  #[tokio::test]
  async fn oversized_file_is_rejected_before_touching_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("never-created");
    let store = store_in(&dir, 4);

    let err = store.save(&photo(b"12345")).await.unwrap_err();

    assert!(matches!(err, AppError::Upload(ref m) if m == "File too large"));
    assert!(!dir.exists());
  }

  #[tokio::test]
  async fn unusable_directory_is_an_upload_error() {
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let store = store_in(blocker.path(), 1024);

    let err = store.save(&photo(b"data")).await.unwrap_err();

    assert!(matches!(err, AppError::Upload(_)));
  }

  #[tokio::test]
  async fn failed_write_removes_the_partial_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("profilePic-1-partial.jpeg");
    std::fs::write(&path, b"half").unwrap();

    let err = write_or_discard(FullDisk, &path, b"image bytes").await.unwrap_err();

    assert!(matches!(err, AppError::Upload(ref m) if m.contains("No space left")));
    assert!(!path.exists());
  }

  #[tokio::test]
  async fn successful_write_keeps_the_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("profilePic-1-ok.jpeg");
    let handle = fs::File::create(&path).await.unwrap();

    write_or_discard(handle, &path, b"ok").await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"ok");
  }
}
