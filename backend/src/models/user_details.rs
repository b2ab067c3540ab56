// backend/src/models/user_details.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::upload_store::UploadedFile;

/// Text fields of a profile edit, as submitted by the client.
///
/// Every field is optional; presence is not validated here. `profile_pic`
/// carries the previously stored picture reference when no new file is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileForm {
  #[serde(rename = "userId")]
  pub user_id: Option<String>,
  #[serde(rename = "displayname", alias = "displayName")]
  pub display_name: Option<String>,
  pub phone: Option<String>,
  pub email: Option<String>,
  #[serde(rename = "postalcode", alias = "postalCode")]
  pub postal_code: Option<String>,
  pub city: Option<String>,
  #[serde(rename = "preferredContact")]
  pub preferred_contact: Option<String>,
  #[serde(rename = "profilePic")]
  pub profile_pic: Option<String>,
}

impl ProfileForm {
  /// Sets a field by its wire name. Returns `false` for names outside the schema.
  pub fn set_field(&mut self, name: &str, value: String) -> bool {
    let slot = match name {
      "userId" => &mut self.user_id,
      "displayname" | "displayName" => &mut self.display_name,
      "phone" => &mut self.phone,
      "email" => &mut self.email,
      "postalcode" | "postalCode" => &mut self.postal_code,
      "city" => &mut self.city,
      "preferredContact" => &mut self.preferred_contact,
      "profilePic" => &mut self.profile_pic,
      _ => return false,
    };
    *slot = Some(value);
    true
  }
}

/// A user's contact-detail profile. Replaced wholesale on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserDetails {
  #[serde(rename = "userId")]
  pub user_id: Option<String>,
  #[serde(rename = "displayname", alias = "displayName")]
  pub display_name: Option<String>,
  pub phone: Option<String>,
  pub email: Option<String>,
  #[serde(rename = "postalcode", alias = "postalCode")]
  pub postal_code: Option<String>,
  pub city: Option<String>,
  #[serde(rename = "preferredContact")]
  pub preferred_contact: Option<String>,
  /// Stored filename of the profile photo.
  #[serde(rename = "profilePic")]
  pub profile_pic: Option<String>,
}

impl UserDetails {
  /// Composes the record to persist from the submitted text fields and, if a
  /// file was stored for this request, its generated name. A stored file
  /// always wins over the client-supplied `profilePic` reference.
  pub fn compose(form: ProfileForm, stored_file: Option<&UploadedFile>) -> Self {
    let profile_pic = match stored_file {
      Some(file) => Some(file.stored_name.clone()),
      None => form.profile_pic,
    };

    Self {
      user_id: form.user_id,
      display_name: form.display_name,
      phone: form.phone,
      email: form.email,
      postal_code: form.postal_code,
      city: form.city,
      preferred_contact: form.preferred_contact,
      profile_pic,
    }
  }
}
