// core/src/models/order.rs

use super::food::FoodItem;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type OrderId = u64;

/// One placed order line, as recorded by the upstream.
///
/// `total_price` is computed server-side from the food's price at placement
/// time; the client never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: OrderId,
  #[serde(default)]
  pub student: Option<u64>,
  #[serde(default)]
  pub food: Option<FoodItem>,
  pub quantity: u32,
  pub total_price: BigDecimal,
  pub ordered_at: DateTime<Utc>,
  /// `true` once a manager has settled the dues for this order.
  #[serde(default)]
  pub cleared: bool,
}

impl Order {
  pub fn food_name(&self) -> &str {
    self.food.as_ref().map(|f| f.name.as_str()).unwrap_or("N/A")
  }

  pub fn status_label(&self) -> &'static str {
    if self.cleared {
      "Cleared"
    } else {
      "Pending"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_upstream_order_with_nested_food() {
    let order: Order = serde_json::from_str(
      r#"{"id":7,"student":3,"food":{"id":1,"name":"Momo","price":"120.00"},
          "quantity":2,"total_price":"240.00","ordered_at":"2024-03-01T10:15:00.123456Z","cleared":false}"#,
    )
    .unwrap();
    assert_eq!(order.food_name(), "Momo");
    assert_eq!(order.status_label(), "Pending");
    assert_eq!(order.total_price, BigDecimal::from(240));
  }

  #[test]
  fn missing_food_renders_placeholder_name() {
    let order: Order = serde_json::from_str(
      r#"{"id":8,"quantity":1,"total_price":"20.00","ordered_at":"2024-03-01T10:15:00+05:45","cleared":true}"#,
    )
    .unwrap();
    assert_eq!(order.food_name(), "N/A");
    assert_eq!(order.status_label(), "Cleared");
  }
}
