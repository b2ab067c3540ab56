// backend/src/pipelines/mod.rs

//! Request workflows built on the `flow` engine.

use crate::errors::AppError;
use crate::flow::Pipeline;

pub mod contexts;
pub mod profile_update_pipeline;

use contexts::ProfileUpdateCtxData;

/// Every pipeline the application runs, built once at startup.
pub struct AppPipelines {
  pub profile_update: Pipeline<ProfileUpdateCtxData, AppError>,
}

pub fn build_pipelines() -> AppPipelines {
  let pipelines = AppPipelines {
    profile_update: profile_update_pipeline::build_profile_update_pipeline(),
  };
  tracing::info!("Application pipelines built.");
  pipelines
}
