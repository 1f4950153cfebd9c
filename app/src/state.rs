// app/src/state.rs
use crate::config::AppConfig;
use crate::visitors::VisitorRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub visitors: Arc<VisitorRegistry>,
}
