// core/src/api/client.rs

use super::config::ApiConfig;
use super::detail::{detail_from_body, field_errors_from_body, generic_failure};
use super::wire::{LoginRequest, LoginResponse, PlaceOrderRequest, RegistrationRequest, RegistrationResponse};
use crate::error::{CanteenError, CanteenResult, LOGIN_FAILED, REGISTRATION_FAILED};
use crate::models::{DuesSummary, FoodId, FoodItem, Order};
use crate::session::SessionStore;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

pub const LOGIN_PATH: &str = "/login/";
pub const REGISTER_PATH: &str = "/register/";
pub const FOODS_PATH: &str = "/foods/";
pub const ORDERS_PATH: &str = "/orders/";
pub const DUES_PATH: &str = "/student-dues/";

/// Whether a request carries the session's bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
  /// No `Authorization` header (login, registration).
  Anonymous,
  /// `Authorization: Bearer <token>`; refused locally when no token is stored.
  Bearer,
}

/// Which message to show when a rejected response carries no `detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
  Status,
  Login,
  Registration,
}

/// Operations the canteen client needs from the upstream API.
#[async_trait]
pub trait CanteenApi: Send + Sync {
  /// Exchanges credentials for tokens. Does not touch the session store.
  async fn login(&self, username: &str, password: &str) -> CanteenResult<LoginResponse>;
  /// Creates a student account and returns the upstream's confirmation.
  async fn register(&self, request: &RegistrationRequest) -> CanteenResult<String>;
  async fn list_foods(&self) -> CanteenResult<Vec<FoodItem>>;
  async fn list_orders(&self) -> CanteenResult<Vec<Order>>;
  async fn student_dues(&self) -> CanteenResult<DuesSummary>;
  /// Places one order line. Each call is an independent, non-idempotent POST.
  async fn place_order_line(&self, food_id: FoodId, quantity: u32) -> CanteenResult<Order>;
}

/// Builds an API handle bound to one session.
pub trait ApiConnector: Send + Sync {
  fn connect(&self, session: Arc<SessionStore>) -> Arc<dyn CanteenApi>;
}

pub struct ApiClient {
  config: ApiConfig,
  http: reqwest::Client,
  session: Arc<SessionStore>,
}

impl std::fmt::Debug for ApiClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ApiClient")
      .field("base_url", &self.config.base_url())
      .finish()
  }
}

impl ApiClient {
  pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> Self {
    Self::with_http(config, reqwest::Client::new(), session)
  }

  /// Shares an existing connection pool.
  pub fn with_http(config: ApiConfig, http: reqwest::Client, session: Arc<SessionStore>) -> Self {
    Self { config, http, session }
  }

  /// Sends one request and decodes a 2xx JSON body into `T`.
  ///
  /// Non-2xx responses become [`CanteenError::Http`] carrying the body's
  /// `detail` or a generic message.
  pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>, auth: Auth) -> CanteenResult<T>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    self.request_with_fallback(method, path, body, auth, Fallback::Status).await
  }

  async fn request_with_fallback<T, B>(
    &self,
    method: Method,
    path: &str,
    body: Option<&B>,
    auth: Auth,
    fallback: Fallback,
  ) -> CanteenResult<T>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    let response = self.dispatch(method, path, body, auth).await?;
    let response = ensure_success(response, fallback).await?;
    response.json::<T>().await.map_err(|source| CanteenError::Decode {
      context: path.to_string(),
      source,
    })
  }

  #[instrument(name = "ApiClient::dispatch", skip_all, fields(method = %method, path = %path), err(Display))]
  async fn dispatch<B>(&self, method: Method, path: &str, body: Option<&B>, auth: Auth) -> CanteenResult<Response>
  where
    B: Serialize + ?Sized,
  {
    // Read the token at dispatch time so a concurrent logout is honoured.
    let token = match auth {
      Auth::Anonymous => None,
      Auth::Bearer => Some(self.session.access_token().ok_or_else(|| {
        debug!("Refusing authenticated request without an access token.");
        CanteenError::Unauthenticated
      })?),
    };

    let mut builder = self.http.request(method, self.config.url_for(path));
    if let Some(token) = token {
      builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(body) = body {
      builder = builder.json(body);
    }

    let response = builder.send().await.map_err(|source| {
      warn!(error = %source, "Upstream unreachable.");
      CanteenError::Transport { source }
    })?;
    debug!(status = response.status().as_u16(), "Upstream responded.");
    Ok(response)
  }
}

async fn ensure_success(response: Response, fallback: Fallback) -> CanteenResult<Response> {
  let status = response.status();
  if status.is_success() {
    return Ok(response);
  }
  let status = status.as_u16();
  // An unreadable body just means there is no detail to show.
  let body = response.bytes().await.unwrap_or_default();
  let detail = detail_from_body(&body).unwrap_or_else(|| match fallback {
    Fallback::Status => generic_failure(status),
    Fallback::Login => LOGIN_FAILED.to_string(),
    Fallback::Registration => field_errors_from_body(&body).unwrap_or_else(|| REGISTRATION_FAILED.to_string()),
  });
  warn!(status, detail = %detail, "Upstream rejected request.");
  Err(CanteenError::Http { status, detail })
}

#[async_trait]
impl CanteenApi for ApiClient {
  #[instrument(name = "ApiClient::login", skip(self, password), err(Display))]
  async fn login(&self, username: &str, password: &str) -> CanteenResult<LoginResponse> {
    let body = LoginRequest { username, password };
    self
      .request_with_fallback(Method::POST, LOGIN_PATH, Some(&body), Auth::Anonymous, Fallback::Login)
      .await
  }

  #[instrument(name = "ApiClient::register", skip_all, fields(username = %request.username), err(Display))]
  async fn register(&self, request: &RegistrationRequest) -> CanteenResult<String> {
    let response: RegistrationResponse = self
      .request_with_fallback(
        Method::POST,
        REGISTER_PATH,
        Some(request),
        Auth::Anonymous,
        Fallback::Registration,
      )
      .await?;
    Ok(response.message.unwrap_or_else(|| "Student registered successfully".to_string()))
  }

  async fn list_foods(&self) -> CanteenResult<Vec<FoodItem>> {
    self.request::<_, ()>(Method::GET, FOODS_PATH, None, Auth::Bearer).await
  }

  async fn list_orders(&self) -> CanteenResult<Vec<Order>> {
    self.request::<_, ()>(Method::GET, ORDERS_PATH, None, Auth::Bearer).await
  }

  async fn student_dues(&self) -> CanteenResult<DuesSummary> {
    self.request::<_, ()>(Method::GET, DUES_PATH, None, Auth::Bearer).await
  }

  async fn place_order_line(&self, food_id: FoodId, quantity: u32) -> CanteenResult<Order> {
    let body = PlaceOrderRequest { food_id, quantity };
    self.request(Method::POST, ORDERS_PATH, Some(&body), Auth::Bearer).await
  }
}

/// Connects sessions to one upstream over a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpConnector {
  config: ApiConfig,
  http: reqwest::Client,
}

impl HttpConnector {
  pub fn new(config: ApiConfig) -> Self {
    Self {
      config,
      http: reqwest::Client::new(),
    }
  }
}

impl ApiConnector for HttpConnector {
  fn connect(&self, session: Arc<SessionStore>) -> Arc<dyn CanteenApi> {
    Arc::new(ApiClient::with_http(self.config.clone(), self.http.clone(), session))
  }
}
