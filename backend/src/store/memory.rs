// backend/src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use super::{require_user_id, UserStore};
use crate::errors::{AppError, Result as AppResult};
use crate::models::{TradeItem, User, UserDetails};

/// Process-local store, selected with `STORAGE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
  users: RwLock<HashMap<String, User>>,
  details: RwLock<HashMap<String, UserDetails>>,
  trade_items: RwLock<Vec<TradeItem>>,
}

impl InMemoryUserStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds a listing; there is no HTTP route that creates trade items.
  pub fn add_trade_item(&self, item: TradeItem) {
    self.trade_items.write().push(item);
  }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
  #[instrument(name = "memory_store::insert_user", skip(self, user), fields(user_id = %user.id))]
  async fn insert_user(&self, user: User) -> AppResult<User> {
    let mut users = self.users.write();
    if users.contains_key(&user.id) {
      return Err(AppError::Conflict(format!("User with ID {} already exists.", user.id)));
    }
    users.insert(user.id.clone(), user.clone());
    debug!("User inserted.");
    Ok(user)
  }

  async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
    Ok(self.users.read().get(id).cloned())
  }

  async fn get_user_details(&self, user_id: &str) -> AppResult<Option<UserDetails>> {
    Ok(self.details.read().get(user_id).cloned())
  }

  #[instrument(name = "memory_store::upsert_user_details", skip_all)]
  async fn upsert_user_details(&self, details: UserDetails) -> AppResult<UserDetails> {
    let user_id = require_user_id(&details)?.to_string();
    self.details.write().insert(user_id, details.clone());
    debug!("User details replaced.");
    Ok(details)
  }

  async fn trade_items_by_user(&self, user_id: &str) -> AppResult<Vec<TradeItem>> {
    let mut items: Vec<TradeItem> = self
      .trade_items
      .read()
      .iter()
      .filter(|item| item.user_id == user_id)
      .cloned()
      .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(items)
  }
}
