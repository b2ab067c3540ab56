// backend/src/web/handlers/mod.rs

use serde::Deserialize;

pub mod trade_item_handlers;
pub mod user_details_handlers;
pub mod user_handlers;

/// `?uid=` query shared by the lookup endpoints.
#[derive(Deserialize, Debug)]
pub struct UidQuery {
  pub uid: String,
}
