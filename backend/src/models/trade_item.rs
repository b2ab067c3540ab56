// backend/src/models/trade_item.rs

use serde::Serialize;
use sqlx::FromRow;

/// An item a user has listed for trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TradeItem {
  pub id: String,
  pub user_id: String,
  pub name: String,
  pub description: Option<String>,
  pub image_url: Option<String>,
}
