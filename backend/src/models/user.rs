// backend/src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
  #[serde(alias = "uid")]
  pub id: String,
  pub user_name: String,
  pub email: String,
}

/// Body of `POST /api/users`. The web client sends `uid` and `userName` only.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
  #[serde(alias = "id")]
  pub uid: String,
  pub user_name: String,
  #[serde(default)]
  pub email: String,
}

impl From<NewUser> for User {
  fn from(new_user: NewUser) -> Self {
    Self {
      id: new_user.uid,
      user_name: new_user.user_name,
      email: new_user.email,
    }
  }
}
