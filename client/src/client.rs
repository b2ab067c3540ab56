// client/src/client.rs

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ClientError, ErrorBody, Result};

/// Shared HTTP handle for the service wrappers. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
  inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
  http: reqwest::Client,
  base_url: String,
}

impl ApiClient {
  /// `base_url` is the server origin, e.g. `http://127.0.0.1:8080`.
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let http = reqwest::Client::builder().build()?;
    Ok(Self::with_http_client(http, base_url))
  }

  pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self {
      inner: Arc::new(ApiClientInner { http, base_url }),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.inner.base_url
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.inner.base_url, path)
  }

  pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
    let response = self.inner.http.get(self.url(path)).query(query).send().await?;
    handle_response(response).await
  }

  pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
    let response = self.inner.http.post(self.url(path)).json(body).send().await?;
    handle_response(response).await
  }

  pub(crate) async fn post_multipart<T: DeserializeOwned>(
    &self,
    path: &str,
    form: reqwest::multipart::Form,
  ) -> Result<T> {
    let response = self.inner.http.post(self.url(path)).multipart(form).send().await?;
    handle_response(response).await
  }
}

impl std::fmt::Debug for ApiClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ApiClient")
      .field("base_url", &self.inner.base_url)
      .finish_non_exhaustive()
  }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
  let status = response.status();
  if status.is_success() {
    debug!(status = status.as_u16(), "Request succeeded.");
    return Ok(response.json().await?);
  }
  Err(parse_error(response).await)
}

/// Prefers the backend's `{ "error": ... }` message, else the raw body.
async fn parse_error(response: reqwest::Response) -> ClientError {
  let status = response.status().as_u16();
  let body = match response.text().await {
    Ok(body) => body,
    Err(e) => return ClientError::Http(e),
  };
  let message = serde_json::from_str::<ErrorBody>(&body)
    .map(|b| b.error)
    .unwrap_or(body);
  warn!(status, %message, "Request rejected.");
  ClientError::Api { status, message }
}
