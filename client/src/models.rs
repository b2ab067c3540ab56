// client/src/models.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub user_name: String,
  pub email: String,
}

/// Body of `POST /api/users`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewUser<'a> {
  pub uid: &'a str,
  pub user_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeItem {
  pub id: String,
  pub user_id: String,
  pub name: String,
  pub description: Option<String>,
  pub image_url: Option<String>,
}

/// Contact-detail profile, using the backend's wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
  #[serde(rename = "userId")]
  pub user_id: Option<String>,
  #[serde(rename = "displayname")]
  pub display_name: Option<String>,
  pub phone: Option<String>,
  pub email: Option<String>,
  #[serde(rename = "postalcode")]
  pub postal_code: Option<String>,
  pub city: Option<String>,
  #[serde(rename = "preferredContact")]
  pub preferred_contact: Option<String>,
  #[serde(rename = "profilePic")]
  pub profile_pic: Option<String>,
}

impl UserDetails {
  /// `(wire name, value)` for every field that is set.
  pub(crate) fn text_fields(&self) -> Vec<(&'static str, String)> {
    [
      ("userId", &self.user_id),
      ("displayname", &self.display_name),
      ("phone", &self.phone),
      ("email", &self.email),
      ("postalcode", &self.postal_code),
      ("city", &self.city),
      ("preferredContact", &self.preferred_contact),
      ("profilePic", &self.profile_pic),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.as_ref().map(|v| (name, v.clone())))
    .collect()
  }
}

/// A new profile photo to send along with a profile edit.
#[derive(Debug, Clone)]
pub struct ProfilePhoto {
  pub file_name: String,
  pub mime_type: String,
  pub bytes: Vec<u8>,
}
