// app/src/config.rs

use crate::errors::{AppError, Result};
use canteen::api::config::DEFAULT_API_BASE_URL;
use canteen::ApiConfig;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Log line format selected by `LOG_FORMAT`. Read before the configuration
/// so that loading it is already logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl LogFormat {
  /// Anything other than `json` (case-insensitive) keeps the pretty formatter.
  pub fn parse(raw: Option<&str>) -> Self {
    match raw.map(str::trim) {
      Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
      _ => LogFormat::Pretty,
    }
  }

  pub fn from_env() -> Self {
    Self::parse(env::var("LOG_FORMAT").ok().as_deref())
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub api_base_url: String,
  /// When set, each visitor's session is kept in `<session_dir>/<visitor>.json`.
  pub session_dir: Option<PathBuf>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let config = Self::from_lookup(|name| env::var(name).ok())?;
    tracing::info!(
      api_base_url = %config.api_base_url,
      persistent_sessions = config.session_dir.is_some(),
      "Application configuration loaded successfully."
    );
    Ok(config)
  }

  /// Builds the configuration from any variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let api_base_url = get_env("CANTEEN_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
      return Err(AppError::Config(format!(
        "CANTEEN_API_BASE_URL must be an http(s) URL, got '{}'",
        api_base_url
      )));
    }
    let session_dir = get_env("SESSION_DIR").map(PathBuf::from);

    Ok(Self {
      server_host,
      server_port,
      api_base_url,
      session_dir,
    })
  }

  pub fn api_config(&self) -> ApiConfig {
    ApiConfig::new(self.api_base_url.clone())
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
