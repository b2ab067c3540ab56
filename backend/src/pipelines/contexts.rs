// backend/src/pipelines/contexts.rs

//! Data carried through pipeline runs. Handlers receive these wrapped in `ContextData`.

use crate::models::user_details::ProfileForm;
use crate::models::UserDetails;
use crate::services::upload_store::{IncomingFile, UploadedFile};
use crate::state::AppState;

#[derive(Clone)]
pub struct ProfileUpdateCtxData {
  pub app_state: AppState,
  pub form: ProfileForm,
  /// Taken by `store_profile_pic` once written.
  pub incoming_file: Option<IncomingFile>,
  pub stored_file: Option<UploadedFile>,
  pub user_details: Option<UserDetails>,
  /// What storage returned for the update.
  pub persisted: Option<UserDetails>,
}

impl ProfileUpdateCtxData {
  pub fn new(app_state: AppState, form: ProfileForm, incoming_file: Option<IncomingFile>) -> Self {
    Self {
      app_state,
      form,
      incoming_file,
      stored_file: None,
      user_details: None,
      persisted: None,
    }
  }
}
