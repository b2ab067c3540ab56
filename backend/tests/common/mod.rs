// backend/tests/common/mod.rs
#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::Level;

use restyle_backend::config::{AppConfig, LogFormat, StorageBackend, UploadConfig};
use restyle_backend::errors::Result as AppResult;
use restyle_backend::models::{TradeItem, User, UserDetails};
use restyle_backend::state::AppState;
use restyle_backend::store::{InMemoryUserStore, UserStore};

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// In-memory store that also records how it was called.
#[derive(Default)]
pub struct RecordingStore {
  pub inner: InMemoryUserStore,
  pub inserted: Mutex<Vec<User>>,
  pub upsert_calls: AtomicUsize,
}

impl RecordingStore {
  pub fn upserts(&self) -> usize {
    self.upsert_calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl UserStore for RecordingStore {
  async fn insert_user(&self, user: User) -> AppResult<User> {
    self.inserted.lock().push(user.clone());
    self.inner.insert_user(user).await
  }

  async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
    self.inner.get_user(id).await
  }

  async fn get_user_details(&self, user_id: &str) -> AppResult<Option<UserDetails>> {
    self.inner.get_user_details(user_id).await
  }

  async fn upsert_user_details(&self, details: UserDetails) -> AppResult<UserDetails> {
    self.upsert_calls.fetch_add(1, Ordering::SeqCst);
    self.inner.upsert_user_details(details).await
  }

  async fn trade_items_by_user(&self, user_id: &str) -> AppResult<Vec<TradeItem>> {
    self.inner.trade_items_by_user(user_id).await
  }
}

pub fn test_config(upload_dir: &Path, max_bytes: usize) -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    storage_backend: StorageBackend::Memory,
    database_url: None,
    run_migrations: false,
    upload: UploadConfig {
      dir: upload_dir.to_path_buf(),
      field_name: "profilePic".to_string(),
      max_bytes,
    },
    log_format: LogFormat::Pretty,
  }
}

pub fn test_state(upload_dir: &Path) -> (AppState, Arc<RecordingStore>) {
  test_state_with_limit(upload_dir, 1024 * 1024)
}

pub fn test_state_with_limit(upload_dir: &Path, max_bytes: usize) -> (AppState, Arc<RecordingStore>) {
  setup_tracing();
  let store = Arc::new(RecordingStore::default());
  let state = AppState::new(test_config(upload_dir, max_bytes), store.clone());
  (state, store)
}

pub fn files_in(dir: &Path) -> Vec<String> {
  match std::fs::read_dir(dir) {
    Ok(entries) => entries
      .filter_map(|e| e.ok())
      .map(|e| e.file_name().to_string_lossy().into_owned())
      .collect(),
    Err(_) => Vec::new(),
  }
}

pub const BOUNDARY: &str = "restyle-test-boundary";

/// Hand-built `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBody {
  body: Vec<u8>,
}

impl MultipartBody {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn text(self, name: &str, value: &str) -> Self {
    self.text_bytes(name, value.as_bytes())
  }

  /// Text part with arbitrary bytes as its value.
  pub fn text_bytes(mut self, name: &str, value: &[u8]) -> Self {
    self.body.extend_from_slice(
      format!("--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n", BOUNDARY, name).as_bytes(),
    );
    self.body.extend_from_slice(value);
    self.body.extend_from_slice(b"\r\n");
    self
  }

  pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
    self.body.extend_from_slice(
      format!(
        "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
        BOUNDARY, name, filename
      )
      .as_bytes(),
    );
    self.body.extend_from_slice(bytes);
    self.body.extend_from_slice(b"\r\n");
    self
  }

  pub fn content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
  }

  /// The body without its closing boundary.
  pub fn build_unterminated(self) -> Vec<u8> {
    self.body
  }

  pub fn build(mut self) -> Vec<u8> {
    self.body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    self.body
  }
}
