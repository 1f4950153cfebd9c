// core/src/models/food.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Upstream primary key of a menu item.
pub type FoodId = u64;

pub const DEFAULT_DESCRIPTION: &str = "Delicious meal prepared with fresh ingredients";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
  pub id: FoodId,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  /// Absolute image URL as served by the upstream media handler.
  #[serde(default)]
  pub image: Option<String>,
  pub price: BigDecimal,
  #[serde(default = "available_by_default")]
  pub available: bool,
}

fn available_by_default() -> bool {
  true
}

impl FoodItem {
  /// Blank descriptions fall back to the house blurb.
  pub fn description_or_default(&self) -> &str {
    match self.description.as_deref().map(str::trim) {
      Some(text) if !text.is_empty() => text,
      _ => DEFAULT_DESCRIPTION,
    }
  }
}
