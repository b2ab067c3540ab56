// backend/src/pipelines/profile_update_pipeline.rs

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::flow::{ContextData, Pipeline, PipelineControl, SkipCondition};
use crate::models::UserDetails;
use crate::pipelines::contexts::ProfileUpdateCtxData;

pub const STORE_PROFILE_PIC: &str = "store_profile_pic";
pub const COMPOSE_USER_DETAILS: &str = "compose_user_details";
pub const PERSIST_USER_DETAILS: &str = "persist_user_details";

/// Upload, compose, persist. An upload error ends the run before storage is touched.
pub fn build_profile_update_pipeline() -> Pipeline<ProfileUpdateCtxData, AppError> {
  let no_file: SkipCondition<ProfileUpdateCtxData> =
    Arc::new(|ctx: &ContextData<ProfileUpdateCtxData>| ctx.read().incoming_file.is_none());

  let mut p = Pipeline::<ProfileUpdateCtxData, AppError>::new(
    "profile_update",
    &[
      (STORE_PROFILE_PIC, false, Some(no_file)),
      (COMPOSE_USER_DETAILS, false, None),
      (PERSIST_USER_DETAILS, false, None),
    ],
  );

  p.on_root(STORE_PROFILE_PIC, store_profile_pic_step);
  p.on_root(COMPOSE_USER_DETAILS, compose_user_details_step);
  p.on_root(PERSIST_USER_DETAILS, persist_user_details_step);

  info!("Profile update pipeline built.");
  p
}

#[instrument(name = "step::store_profile_pic", skip(ctx_data), err(Display))]
async fn store_profile_pic_step(ctx_data: ContextData<ProfileUpdateCtxData>) -> AppResult<PipelineControl> {
  let (uploads, incoming) = {
    let mut guard = ctx_data.write();
    (guard.app_state.uploads.clone(), guard.incoming_file.take())
  }; // guard dropped

  let Some(incoming) = incoming else {
    return Ok(PipelineControl::Continue);
  };

  let stored = uploads.save(&incoming).await?;
  ctx_data.write().stored_file = Some(stored);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "step::compose_user_details", skip(ctx_data))]
async fn compose_user_details_step(ctx_data: ContextData<ProfileUpdateCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let details = UserDetails::compose(guard.form.clone(), guard.stored_file.as_ref());
  debug!(
    user_id = ?details.user_id,
    new_picture = guard.stored_file.is_some(),
    "Composed user details."
  );
  guard.user_details = Some(details);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "step::persist_user_details", skip(ctx_data), err(Display))]
async fn persist_user_details_step(ctx_data: ContextData<ProfileUpdateCtxData>) -> AppResult<PipelineControl> {
  let (store, details) = {
    let guard = ctx_data.read();
    (guard.app_state.store.clone(), guard.user_details.clone())
  }; // guard dropped

  let details = details
    .ok_or_else(|| AppError::Internal("User details were not composed before persisting.".to_string()))?;

  let saved = store.upsert_user_details(details).await?;
  ctx_data.write().persisted = Some(saved);
  Ok(PipelineControl::Continue)
}
