// app/src/web/dto.rs

use canteen::{ActiveTab, CheckoutReport, FoodId, LineOutcome, OrderId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct LoginPayload {
  pub username: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct TabPayload {
  pub tab: ActiveTab,
}

/// `quantity` is whatever the number input held: a number, a numeric string
/// or junk.
#[derive(Deserialize, Debug)]
pub struct QuantityPayload {
  pub food_id: FoodId,
  #[serde(default)]
  pub quantity: Value,
}

#[derive(Deserialize, Debug, Default)]
pub struct CheckoutQuery {
  /// On a partial failure, drop the lines that were already placed so a
  /// retry only submits the rest.
  #[serde(default)]
  pub discard_placed: bool,
}

/// Reads a quantity the way a number input would: non-numeric input is 0,
/// which the cart then raises to 1.
pub fn parse_quantity(raw: &Value) -> i64 {
  match raw {
    Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)).unwrap_or(0),
    Value::String(s) => {
      let s = s.trim();
      s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        .unwrap_or(0)
    }
    _ => 0,
  }
}

// --- Response DTOs ---
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckoutLineView {
  pub food_id: FoodId,
  pub quantity: u32,
  pub status: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub order_id: Option<OrderId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl CheckoutLineView {
  pub fn from_report(report: &CheckoutReport) -> Vec<Self> {
    report
      .lines
      .iter()
      .map(|line| CheckoutLineView {
        food_id: line.food_id,
        quantity: line.quantity,
        status: line.outcome.label(),
        order_id: match &line.outcome {
          LineOutcome::Placed(order) => Some(order.id),
          _ => None,
        },
        error: match &line.outcome {
          LineOutcome::Failed(e) => Some(e.user_message()),
          _ => None,
        },
      })
      .collect()
  }
}
