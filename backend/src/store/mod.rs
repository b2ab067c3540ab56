// backend/src/store/mod.rs

//! The storage backend behind every endpoint.
//!
//! Handlers and pipeline steps only see `dyn UserStore`; results and
//! rejections are passed through to the HTTP layer unchanged.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::{AppError, Result as AppResult};
use crate::models::{TradeItem, User, UserDetails};

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

#[async_trait]
pub trait UserStore: Send + Sync {
  /// Inserts a new account. Fails with `Conflict` when the id is taken.
  async fn insert_user(&self, user: User) -> AppResult<User>;

  async fn get_user(&self, id: &str) -> AppResult<Option<User>>;

  async fn get_user_details(&self, user_id: &str) -> AppResult<Option<UserDetails>>;

  /// Creates or replaces the whole profile keyed by `details.user_id`.
  async fn upsert_user_details(&self, details: UserDetails) -> AppResult<UserDetails>;

  async fn trade_items_by_user(&self, user_id: &str) -> AppResult<Vec<TradeItem>>;
}

/// Profiles are keyed by user id, so a record without one cannot be stored.
pub(crate) fn require_user_id(details: &UserDetails) -> AppResult<&str> {
  details
    .user_id
    .as_deref()
    .ok_or_else(|| AppError::Validation("userId is required to store user details".to_string()))
}
