// app/src/main.rs

mod config;
mod errors;
mod state;
mod visitors;
mod web;

use crate::config::{AppConfig, LogFormat};
use crate::state::AppState;
use crate::visitors::VisitorRegistry;

use actix_web::{web as actix_data, App, HttpServer};
use canteen::HttpConnector;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok();
  init_tracing(LogFormat::from_env());

  tracing::info!("Starting canteen web server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let connector = Arc::new(HttpConnector::new(app_config.api_config()));
  let app_state = AppState {
    config: app_config.clone(),
    visitors: Arc::new(VisitorRegistry::new(connector, app_config.session_dir.clone())),
  };

  let server_address = app_config.bind_address();
  tracing::info!(upstream = %app_config.api_base_url, "Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
