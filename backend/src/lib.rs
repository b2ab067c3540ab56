// backend/src/lib.rs

//! Backend of the ReStyle marketplace: user accounts, contact-detail profiles
//! with photo upload, and trade item listings over a small REST API.

pub mod config;
pub mod errors;
pub mod flow;
pub mod models;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::errors::Result as AppResult;
use crate::store::{InMemoryUserStore, PgUserStore, UserStore};

/// Builds the storage backend selected by `config`.
pub async fn connect_store(config: &AppConfig) -> AppResult<Arc<dyn UserStore>> {
  match config.storage_backend {
    StorageBackend::Memory => {
      tracing::warn!("Using the in-memory store; data is lost on restart.");
      Ok(Arc::new(InMemoryUserStore::new()))
    }
    StorageBackend::Postgres => {
      let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| errors::AppError::Config("DATABASE_URL is not set".to_string()))?;
      let store = PgUserStore::connect(database_url).await?;
      if config.run_migrations {
        store.run_migrations().await?;
      }
      Ok(Arc::new(store))
    }
  }
}
