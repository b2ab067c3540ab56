// client/src/services/trade.rs

use futures_util::future::{BoxFuture, FutureExt};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::TradeItem;

#[derive(Debug, Clone)]
pub struct TradeService {
  client: ApiClient,
}

impl TradeService {
  pub fn new(client: ApiClient) -> Self {
    Self { client }
  }

  /// Lists the items `uid` has up for trade.
  ///
  /// Returns `None` without touching the network when `uid` is empty, so a
  /// caller can tell "no user yet" apart from a failed request.
  pub fn get_items_by_user(&self, uid: &str) -> Option<BoxFuture<'static, Result<Vec<TradeItem>>>> {
    if uid.is_empty() {
      debug!("No user id; skipping trade item lookup.");
      return None;
    }
    let client = self.client.clone();
    let uid = uid.to_string();
    Some(async move { client.get::<Vec<TradeItem>>("/api/tradeitems", &[("uid", uid.as_str())]).await }.boxed())
  }
}
