// backend/src/web/handlers/user_details_handlers.rs

use actix_multipart::Multipart;
use actix_web::{web, Either, HttpResponse};
use tracing::{info, instrument, warn};

use super::UidQuery;
use crate::errors::AppError;
use crate::flow::{ContextData, PipelineResult};
use crate::models::user_details::ProfileForm;
use crate::models::UserDetails;
use crate::pipelines::contexts::ProfileUpdateCtxData;
use crate::services::upload_store::IncomingFile;
use crate::state::AppState;
use crate::web::forms::read_profile_submission;

#[instrument(name = "handler::get_user_details", skip(app_state, query), fields(uid = %query.uid))]
pub async fn get_user_details_handler(
  app_state: web::Data<AppState>,
  query: web::Query<UidQuery>,
) -> Result<HttpResponse, AppError> {
  match app_state.store.get_user_details(&query.uid).await? {
    Some(details) => Ok(HttpResponse::Ok().json(details)),
    None => {
      warn!("No details stored for user {}.", query.uid);
      Err(AppError::NotFound(format!("User details for ID {} not found.", query.uid)))
    }
  }
}

/// Profile edit sent as `multipart/form-data`, optionally carrying a new photo.
#[instrument(name = "handler::update_user_details_multipart", skip(app_state, payload))]
pub async fn update_user_details_multipart_handler(
  app_state: web::Data<AppState>,
  payload: Multipart,
) -> Result<HttpResponse, AppError> {
  let submission = read_profile_submission(payload, &app_state.uploads).await?;
  let saved = run_profile_update(&app_state, submission.form, submission.file).await?;
  Ok(HttpResponse::Ok().json(saved))
}

/// Profile edit without a file, as JSON or url-encoded text fields.
#[instrument(name = "handler::update_user_details", skip(app_state, payload))]
pub async fn update_user_details_handler(
  app_state: web::Data<AppState>,
  payload: Either<web::Json<ProfileForm>, web::Form<ProfileForm>>,
) -> Result<HttpResponse, AppError> {
  let form = match payload {
    Either::Left(json) => json.into_inner(),
    Either::Right(form) => form.into_inner(),
  };
  let saved = run_profile_update(&app_state, form, None).await?;
  Ok(HttpResponse::Ok().json(saved))
}

async fn run_profile_update(
  app_state: &AppState,
  form: ProfileForm,
  file: Option<IncomingFile>,
) -> Result<UserDetails, AppError> {
  let ctx_data = ContextData::new(ProfileUpdateCtxData::new(app_state.clone(), form, file));

  match app_state.pipelines.profile_update.run(ctx_data.clone()).await {
    Ok(PipelineResult::Completed) => {
      let guard = ctx_data.read();
      let saved = guard.persisted.clone().ok_or_else(|| {
        warn!("Profile update pipeline completed but nothing was persisted.");
        AppError::Internal("Profile update completed without a stored record.".to_string())
      })?;
      info!(
        user_id = ?saved.user_id,
        new_picture = guard.stored_file.is_some(),
        "Profile updated."
      );
      Ok(saved)
    }
    Ok(PipelineResult::Stopped) => {
      warn!("Profile update pipeline was stopped by a handler.");
      Err(AppError::Internal("Profile update was halted by an internal step.".to_string()))
    }
    Err(app_err) => {
      warn!("Profile update pipeline failed: {:?}", app_err);
      Err(app_err)
    }
  }
}
