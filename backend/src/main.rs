// backend/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use restyle_backend::config::{AppConfig, LogFormat};
use restyle_backend::state::AppState;
use restyle_backend::web::configure_app_routes;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  match format {
    LogFormat::Json => tracing_subscriber::fmt()
      .json()
      .with_env_filter(filter)
      .with_span_events(FmtSpan::CLOSE)
      .init(),
    LogFormat::Pretty => tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_span_events(FmtSpan::CLOSE)
      .init(),
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("Failed to load application configuration: {}", e);
      std::process::exit(1);
    }
  };

  init_tracing(app_config.log_format);
  tracing::info!("Starting ReStyle backend...");

  let store = match restyle_backend::connect_store(&app_config).await {
    Ok(store) => store,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise the storage backend.");
      std::process::exit(1);
    }
  };

  let server_address = app_config.server_address();
  let app_state = AppState::new(app_config, store);
  tracing::info!(
    upload_dir = %app_state.config.upload.dir.display(),
    upload_field = %app_state.config.upload.field_name,
    "Attempting to bind server to {}...",
    server_address
  );

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
