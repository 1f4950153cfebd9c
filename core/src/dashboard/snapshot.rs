// core/src/dashboard/snapshot.rs

//! Serialisable render state of a [`Dashboard`].

use super::view_model::{ActiveTab, Dashboard};
use crate::display::rupees;
use crate::models::{FoodId, OrderId};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
  pub id: FoodId,
  pub name: String,
  pub description: String,
  pub image: Option<String>,
  pub price: BigDecimal,
  pub price_label: String,
  pub available: bool,
  pub selected: bool,
  pub quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
  pub id: OrderId,
  pub food_name: String,
  pub image: Option<String>,
  pub quantity: u32,
  pub total_price: BigDecimal,
  pub total_label: String,
  pub ordered_at: DateTime<Utc>,
  pub ordered_on: String,
  pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
  pub food_id: FoodId,
  pub name: String,
  pub image: Option<String>,
  pub unit_price: BigDecimal,
  pub quantity: u32,
  pub line_total: BigDecimal,
  /// e.g. `Rs. 120.00 × 2`
  pub line_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
  pub authenticated: bool,
  pub username: Option<String>,
  pub tab: ActiveTab,
  pub menu: Vec<MenuEntry>,
  pub orders: Vec<OrderView>,
  pub due_amount: Option<BigDecimal>,
  pub cart: Vec<CartLineView>,
  pub cart_total: BigDecimal,
  pub cart_total_label: String,
  pub checkout_in_progress: bool,
  pub error: Option<String>,
}

impl Dashboard {
  pub fn snapshot(&self) -> DashboardSnapshot {
    let state = self.view_state();
    let cart = self.cart();

    let menu = state
      .menu
      .iter()
      .map(|food| MenuEntry {
        id: food.id,
        name: food.name.clone(),
        description: food.description_or_default().to_string(),
        image: food.image.clone(),
        price: food.price.clone(),
        price_label: rupees(&food.price),
        available: food.available,
        selected: cart.contains(food.id),
        quantity: cart.quantity(food.id),
      })
      .collect();

    let orders = state
      .orders
      .iter()
      .map(|order| OrderView {
        id: order.id,
        food_name: order.food_name().to_string(),
        image: order.food.as_ref().and_then(|f| f.image.clone()),
        quantity: order.quantity,
        total_price: order.total_price.clone(),
        total_label: rupees(&order.total_price),
        ordered_at: order.ordered_at,
        ordered_on: order.ordered_at.format("%Y-%m-%d").to_string(),
        status: order.status_label(),
      })
      .collect();

    let cart_lines = cart
      .lines()
      .map(|line| CartLineView {
        food_id: line.food.id,
        name: line.food.name.clone(),
        image: line.food.image.clone(),
        unit_price: line.food.price.clone(),
        quantity: line.quantity,
        line_total: line.line_total(),
        line_label: format!("{} × {}", rupees(&line.food.price), line.quantity),
      })
      .collect();

    let cart_total = cart.total();
    DashboardSnapshot {
      authenticated: self.session().is_authenticated(),
      username: self.session().user().map(|u| u.username),
      tab: state.tab,
      menu,
      orders,
      due_amount: state.dues.map(|d| d.due_amount),
      cart: cart_lines,
      cart_total_label: rupees(&cart_total),
      cart_total,
      checkout_in_progress: self.checkout_in_progress(),
      error: state.last_error,
    }
  }
}
