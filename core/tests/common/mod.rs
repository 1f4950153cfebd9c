// core/tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use canteen::api::{CanteenApi, LoginResponse, RegistrationRequest};
use canteen::{AuthTokens, CanteenError, CanteenResult, DuesSummary, FoodId, FoodItem, Order, SessionStore, UserProfile};
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

// --- Tracing Setup ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---
pub fn food(id: FoodId, name: &str, price: &str) -> FoodItem {
  FoodItem {
    id,
    name: name.to_string(),
    description: None,
    image: None,
    price: BigDecimal::from_str(price).unwrap(),
    available: true,
  }
}

pub fn sample_menu() -> Vec<FoodItem> {
  vec![
    food(1, "Veg Momo", "120.00"),
    food(2, "Chicken Thali", "180.00"),
    food(3, "Masala Tea", "20.00"),
  ]
}

pub fn student() -> UserProfile {
  UserProfile {
    id: 11,
    username: "asha".to_string(),
    email: Some("asha@campus.edu".to_string()),
    is_student: true,
    is_manager: false,
    due_amount: Some(BigDecimal::from(0)),
  }
}

pub async fn logged_in_session() -> Arc<SessionStore> {
  let session = Arc::new(SessionStore::in_memory());
  session
    .set_session(
      AuthTokens {
        access: "access-token".to_string(),
        refresh: Some("refresh-token".to_string()),
      },
      Some(student()),
    )
    .await
    .unwrap();
  session
}

// --- Fake upstream ---

/// In-process stand-in for the canteen API with scripted failures and a call log.
pub struct FakeApi {
  session: Arc<SessionStore>,
  pub foods: Mutex<Vec<FoodItem>>,
  pub orders: Mutex<Vec<Order>>,
  pub dues: Mutex<BigDecimal>,
  pub calls: Mutex<Vec<String>>,
  pub fail_foods: Mutex<Option<CanteenError>>,
  pub fail_orders: Mutex<Option<CanteenError>>,
  pub reject_food_ids: Mutex<HashSet<FoodId>>,
  pub place_delay: Mutex<Option<Duration>>,
  pub accepted_password: String,
  next_order_id: AtomicU64,
}

impl FakeApi {
  pub fn new(session: Arc<SessionStore>) -> Arc<Self> {
    Arc::new(Self {
      session,
      foods: Mutex::new(sample_menu()),
      orders: Mutex::new(Vec::new()),
      dues: Mutex::new(BigDecimal::from(0)),
      calls: Mutex::new(Vec::new()),
      fail_foods: Mutex::new(None),
      fail_orders: Mutex::new(None),
      reject_food_ids: Mutex::new(HashSet::new()),
      place_delay: Mutex::new(None),
      accepted_password: "secret".to_string(),
      next_order_id: AtomicU64::new(100),
    })
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().clone()
  }

  pub fn calls_to(&self, prefix: &str) -> usize {
    self.calls.lock().iter().filter(|c| c.starts_with(prefix)).count()
  }

  pub fn reject(&self, food_id: FoodId) {
    self.reject_food_ids.lock().insert(food_id);
  }

  fn record(&self, call: String) {
    self.calls.lock().push(call);
  }

  fn require_token(&self) -> CanteenResult<()> {
    self.session.access_token().map(|_| ()).ok_or(CanteenError::Unauthenticated)
  }
}

fn scripted(slot: &Mutex<Option<CanteenError>>) -> Option<CanteenError> {
  slot.lock().as_ref().map(|e| CanteenError::Http {
    status: e.upstream_status().unwrap_or(500),
    detail: e.user_message(),
  })
}

#[async_trait]
impl CanteenApi for FakeApi {
  async fn login(&self, username: &str, password: &str) -> CanteenResult<LoginResponse> {
    self.record(format!("POST /login/ {username}"));
    if password != self.accepted_password {
      return Err(CanteenError::Http {
        status: 400,
        detail: "Invalid credentials".to_string(),
      });
    }
    Ok(LoginResponse {
      access: format!("access-for-{username}"),
      refresh: Some("refresh".to_string()),
      user: Some(student()),
    })
  }

  async fn register(&self, request: &RegistrationRequest) -> CanteenResult<String> {
    self.record(format!("POST /register/ {}", request.username));
    Ok("Student registered successfully".to_string())
  }

  async fn list_foods(&self) -> CanteenResult<Vec<FoodItem>> {
    self.require_token()?;
    self.record("GET /foods/".to_string());
    if let Some(e) = scripted(&self.fail_foods) {
      return Err(e);
    }
    Ok(self.foods.lock().clone())
  }

  async fn list_orders(&self) -> CanteenResult<Vec<Order>> {
    self.require_token()?;
    self.record("GET /orders/".to_string());
    if let Some(e) = scripted(&self.fail_orders) {
      return Err(e);
    }
    Ok(self.orders.lock().clone())
  }

  async fn student_dues(&self) -> CanteenResult<DuesSummary> {
    self.require_token()?;
    self.record("GET /student-dues/".to_string());
    Ok(DuesSummary {
      due_amount: self.dues.lock().clone(),
    })
  }

  async fn place_order_line(&self, food_id: FoodId, quantity: u32) -> CanteenResult<Order> {
    self.require_token()?;
    self.record(format!("POST /orders/ food={food_id} qty={quantity}"));
    let delay = *self.place_delay.lock();
    if let Some(delay) = delay {
      tokio::time::sleep(delay).await;
    }
    if self.reject_food_ids.lock().contains(&food_id) {
      return Err(CanteenError::Http {
        status: 400,
        detail: format!("Food {food_id} is unavailable"),
      });
    }
    let food = self
      .foods
      .lock()
      .iter()
      .find(|f| f.id == food_id)
      .cloned()
      .ok_or_else(|| CanteenError::Http {
        status: 400,
        detail: "Invalid pk".to_string(),
      })?;
    let total_price = &food.price * BigDecimal::from(quantity);
    let order = Order {
      id: self.next_order_id.fetch_add(1, Ordering::SeqCst),
      student: Some(11),
      food: Some(food),
      quantity,
      total_price: total_price.clone(),
      ordered_at: Utc::now(),
      cleared: false,
    };
    self.orders.lock().push(order.clone());
    let mut dues = self.dues.lock();
    *dues += total_price;
    Ok(order)
  }
}
