// backend/src/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::pipelines::{build_pipelines, AppPipelines};
use crate::services::upload_store::UploadStore;
use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn UserStore>,
  pub uploads: Arc<UploadStore>,
  pub pipelines: Arc<AppPipelines>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Self {
    let uploads = Arc::new(UploadStore::new(config.upload.clone()));
    Self {
      store,
      uploads,
      pipelines: Arc::new(build_pipelines()),
      config: Arc::new(config),
    }
  }
}
