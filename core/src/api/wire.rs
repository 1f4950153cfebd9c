// core/src/api/wire.rs

use crate::models::{FoodId, UserProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
  pub username: &'a str,
  pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
  pub access: String,
  #[serde(default)]
  pub refresh: Option<String>,
  #[serde(default)]
  pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
  pub username: String,
  #[serde(default)]
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RegistrationResponse {
  #[serde(default)]
  pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlaceOrderRequest {
  pub food_id: FoodId,
  pub quantity: u32,
}
