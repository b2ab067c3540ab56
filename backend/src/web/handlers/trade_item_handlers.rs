// backend/src/web/handlers/trade_item_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use super::UidQuery;
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_trade_items", skip(app_state, query), fields(uid = %query.uid))]
pub async fn list_trade_items_handler(
  app_state: web::Data<AppState>,
  query: web::Query<UidQuery>,
) -> Result<HttpResponse, AppError> {
  let items = app_state.store.trade_items_by_user(&query.uid).await?;
  info!("Fetched {} trade items.", items.len());
  Ok(HttpResponse::Ok().json(items))
}
