// backend/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use super::UidQuery;
use crate::errors::AppError;
use crate::models::{NewUser, User};
use crate::state::AppState;

#[instrument(name = "handler::get_user", skip(app_state, query), fields(uid = %query.uid))]
pub async fn get_user_handler(
  app_state: web::Data<AppState>,
  query: web::Query<UidQuery>,
) -> Result<HttpResponse, AppError> {
  match app_state.store.get_user(&query.uid).await? {
    Some(user) => Ok(HttpResponse::Ok().json(user)),
    None => {
      warn!("User {} not found.", query.uid);
      Err(AppError::NotFound(format!("User with ID {} not found.", query.uid)))
    }
  }
}

#[instrument(
  name = "handler::create_user",
  skip(app_state, req_payload),
  fields(uid = %req_payload.uid)
)]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
  let user: User = req_payload.into_inner().into();
  let created = app_state.store.insert_user(user).await?;
  info!("User {} created.", created.id);
  Ok(HttpResponse::Created().json(created))
}
