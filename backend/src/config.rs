// backend/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_UPLOAD_DIR: &str = "./uploads/";
pub const DEFAULT_UPLOAD_FIELD: &str = "profilePic";
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Postgres,
  Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

/// Where and how profile photos are written.
#[derive(Debug, Clone)]
pub struct UploadConfig {
  pub dir: PathBuf,
  /// Multipart field carrying the file.
  pub field_name: String,
  pub max_bytes: usize,
}

impl Default for UploadConfig {
  fn default() -> Self {
    Self {
      dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
      field_name: DEFAULT_UPLOAD_FIELD.to_string(),
      max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage_backend: StorageBackend,
  pub database_url: Option<String>,
  pub run_migrations: bool,
  pub upload: UploadConfig,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let storage_backend = match get_or("STORAGE_BACKEND", "postgres").to_lowercase().as_str() {
      "postgres" => StorageBackend::Postgres,
      "memory" => StorageBackend::Memory,
      other => return Err(AppError::Config(format!("Unknown STORAGE_BACKEND '{}'", other))),
    };

    let database_url = lookup("DATABASE_URL");
    if storage_backend == StorageBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing environment variable 'DATABASE_URL' (required for the postgres storage backend)".to_string(),
      ));
    }

    let run_migrations = get_or("RUN_MIGRATIONS", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid RUN_MIGRATIONS value: {}", e)))?;

    let upload = UploadConfig {
      dir: PathBuf::from(get_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
      field_name: get_or("UPLOAD_FIELD_NAME", DEFAULT_UPLOAD_FIELD),
      max_bytes: get_or("UPLOAD_MAX_BYTES", &DEFAULT_UPLOAD_MAX_BYTES.to_string())
        .parse::<usize>()
        .map_err(|e| AppError::Config(format!("Invalid UPLOAD_MAX_BYTES: {}", e)))?,
    };
    if upload.field_name.is_empty() {
      return Err(AppError::Config("UPLOAD_FIELD_NAME must not be empty".to_string()));
    }

    let log_format = match get_or("LOG_FORMAT", "pretty").to_lowercase().as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Unknown LOG_FORMAT '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      storage_backend,
      database_url,
      run_migrations,
      upload,
      log_format,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
