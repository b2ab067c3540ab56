// client/tests/live_backend_tests.rs

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpServer};
use restyle_backend::config::{AppConfig, LogFormat, StorageBackend, UploadConfig};
use restyle_backend::models::TradeItem as StoredTradeItem;
use restyle_backend::state::AppState;
use restyle_backend::store::InMemoryUserStore;
use restyle_backend::web::configure_app_routes;
use restyle_client::{ApiClient, ClientError, ProfilePhoto, TradeService, UserAccountService, UserDetails};

struct TestServer {
  addr: SocketAddr,
  handle: ServerHandle,
  store: Arc<InMemoryUserStore>,
}

impl TestServer {
  fn client(&self) -> ApiClient {
    ApiClient::new(format!("http://{}", self.addr)).unwrap()
  }
}

fn start_backend(upload_dir: &Path) -> TestServer {
  let config = AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    storage_backend: StorageBackend::Memory,
    database_url: None,
    run_migrations: false,
    upload: UploadConfig {
      dir: upload_dir.to_path_buf(),
      ..UploadConfig::default()
    },
    log_format: LogFormat::Pretty,
  };
  let store = Arc::new(InMemoryUserStore::new());
  let state = AppState::new(config, store.clone());

  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(configure_app_routes)
  })
  .workers(1)
  .bind(("127.0.0.1", 0))
  .unwrap();
  let addr = server.addrs()[0];
  let server = server.run();
  let handle = server.handle();
  actix_web::rt::spawn(server);

  TestServer { addr, handle, store }
}

#[actix_web::test]
async fn account_round_trip() {
  let tmp = tempfile::tempdir().unwrap();
  let server = start_backend(tmp.path());
  let accounts = UserAccountService::new(server.client());

  let created = accounts.post_user_data("u1", "alice").await.unwrap();
  assert_eq!(created.id, "u1");
  assert_eq!(created.user_name, "alice");
  assert_eq!(created.email, "");

  let fetched = accounts.get_user("u1").await.unwrap();
  assert_eq!(fetched, created);

  match accounts.post_user_data("u1", "alice").await {
    Err(ClientError::Api { status, message }) => {
      assert_eq!(status, 409);
      assert!(message.contains("u1"));
    }
    other => panic!("expected conflict, got {:?}", other),
  }

  let err = accounts.get_user("ghost").await.unwrap_err();
  assert_eq!(err.status(), Some(404));

  server.handle.stop(true).await;
}

#[actix_web::test]
async fn profile_edit_with_and_without_photo() {
  let tmp = tempfile::tempdir().unwrap();
  let server = start_backend(tmp.path());
  let accounts = UserAccountService::new(server.client());

  let details = UserDetails {
    user_id: Some("u1".to_string()),
    display_name: Some("Alice".to_string()),
    city: Some("Toronto".to_string()),
    profile_pic: Some("profilePic-1-old.jpeg".to_string()),
    ..Default::default()
  };

  let kept = accounts.update_user_details(&details, None).await.unwrap();
  assert_eq!(kept, details);

  let photo = ProfilePhoto {
    file_name: "me.jpg".to_string(),
    mime_type: "image/jpeg".to_string(),
    bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
  };
  let replaced = accounts.update_user_details(&details, Some(photo)).await.unwrap();
  let new_pic = replaced.profile_pic.clone().unwrap();
  assert_ne!(new_pic, "profilePic-1-old.jpeg");
  assert!(new_pic.starts_with("profilePic-"));
  assert!(tmp.path().join(&new_pic).exists());

  let fetched = accounts.get_user_details("u1").await.unwrap();
  assert_eq!(fetched, replaced);

  server.handle.stop(true).await;
}

#[actix_web::test]
async fn trade_items_for_user() {
  let tmp = tempfile::tempdir().unwrap();
  let server = start_backend(tmp.path());
  server.store.add_trade_item(StoredTradeItem {
    id: "t1".to_string(),
    user_id: "u1".to_string(),
    name: "Wool scarf".to_string(),
    description: None,
    image_url: Some("/img/scarf.jpeg".to_string()),
  });
  let trades = TradeService::new(server.client());

  assert!(trades.get_items_by_user("").is_none());

  let items = trades.get_items_by_user("u1").unwrap().await.unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].name, "Wool scarf");
  assert_eq!(items[0].image_url.as_deref(), Some("/img/scarf.jpeg"));

  server.handle.stop(true).await;
}
