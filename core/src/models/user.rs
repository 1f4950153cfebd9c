// core/src/models/user.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Profile returned alongside the tokens at login and cached in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: u64,
  pub username: String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub is_student: bool,
  #[serde(default)]
  pub is_manager: bool,
  #[serde(default)]
  pub due_amount: Option<BigDecimal>,
}
