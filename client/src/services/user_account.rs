// client/src/services/user_account.rs

use reqwest::multipart::{Form, Part};
use tracing::instrument;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{NewUser, ProfilePhoto, User, UserDetails};

/// Multipart field the backend stores as the profile photo.
pub const PROFILE_PIC_FIELD: &str = "profilePic";

#[derive(Debug, Clone)]
pub struct UserAccountService {
  client: ApiClient,
}

impl UserAccountService {
  pub fn new(client: ApiClient) -> Self {
    Self { client }
  }

  /// Registers an account. The backend stores an empty email.
  #[instrument(name = "client::post_user_data", skip(self))]
  pub async fn post_user_data(&self, uid: &str, user_name: &str) -> Result<User> {
    self
      .client
      .post_json("/api/users", &NewUser { uid, user_name })
      .await
  }

  #[instrument(name = "client::get_user", skip(self))]
  pub async fn get_user(&self, uid: &str) -> Result<User> {
    self.client.get("/api/users", &[("uid", uid)]).await
  }

  #[instrument(name = "client::get_user_details", skip(self))]
  pub async fn get_user_details(&self, uid: &str) -> Result<UserDetails> {
    self.client.get("/api/userdetails", &[("uid", uid)]).await
  }

  /// Replaces the profile. With `photo`, the server stores it and the returned
  /// `profile_pic` is the new stored name; without, `details.profile_pic` is kept.
  #[instrument(
    name = "client::update_user_details",
    skip(self, details, photo),
    fields(user_id = ?details.user_id, with_photo = photo.is_some())
  )]
  pub async fn update_user_details(&self, details: &UserDetails, photo: Option<ProfilePhoto>) -> Result<UserDetails> {
    let mut form = Form::new();
    for (name, value) in details.text_fields() {
      form = form.text(name, value);
    }
    if let Some(photo) = photo {
      let part = Part::bytes(photo.bytes)
        .file_name(photo.file_name)
        .mime_str(&photo.mime_type)?;
      form = form.part(PROFILE_PIC_FIELD, part);
    }
    self.client.post_multipart("/api/userdetails", form).await
  }
}
