// core/src/api/config.rs

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
  base_url: String,
}

impl ApiConfig {
  /// Trailing slashes are stripped so paths can be appended as `/foods/`.
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into();
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn url_for(&self, path: &str) -> String {
    if path.starts_with('/') {
      format!("{}{}", self.base_url, path)
    } else {
      format!("{}/{}", self.base_url, path)
    }
  }
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self::new(DEFAULT_API_BASE_URL)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn joins_paths_without_doubling_slashes() {
    let config = ApiConfig::new("http://canteen.local/api/");
    assert_eq!(config.url_for("/foods/"), "http://canteen.local/api/foods/");
    assert_eq!(config.url_for("orders/"), "http://canteen.local/api/orders/");
  }
}
