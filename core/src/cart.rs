// core/src/cart.rs

//! Client-side selection of menu items awaiting checkout.
//!
//! A cart line is a snapshot: it keeps the [`FoodItem`] it was toggled with,
//! so a later menu refresh never changes the name or price of a selection.
//! Lines iterate in ascending food id, which is the order checkout submits
//! them in.

use crate::models::{FoodId, FoodItem};
use bigdecimal::BigDecimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
  pub food: FoodItem,
  /// Always at least 1.
  pub quantity: u32,
}

impl CartLine {
  pub fn food_id(&self) -> FoodId {
    self.food.id
  }

  pub fn line_total(&self) -> BigDecimal {
    &self.food.price * BigDecimal::from(self.quantity)
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
  lines: BTreeMap<FoodId, CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Removes the food if selected, otherwise selects it at quantity 1.
  /// Returns `true` when the food is selected afterwards.
  pub fn toggle(&mut self, food: &FoodItem) -> bool {
    if self.lines.remove(&food.id).is_some() {
      false
    } else {
      self.lines.insert(
        food.id,
        CartLine {
          food: food.clone(),
          quantity: 1,
        },
      );
      true
    }
  }

  /// Sets the quantity of an existing line to `max(1, quantity)`.
  /// Unknown ids are ignored. Returns the stored quantity.
  pub fn set_quantity(&mut self, food_id: FoodId, quantity: i64) -> Option<u32> {
    let line = self.lines.get_mut(&food_id)?;
    line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
    Some(line.quantity)
  }

  pub fn increment(&mut self, food_id: FoodId) -> Option<u32> {
    let line = self.lines.get_mut(&food_id)?;
    line.quantity = line.quantity.saturating_add(1);
    Some(line.quantity)
  }

  /// Decreasing below 1 is a no-op; it never removes the line.
  pub fn decrement(&mut self, food_id: FoodId) -> Option<u32> {
    let line = self.lines.get_mut(&food_id)?;
    if line.quantity > 1 {
      line.quantity -= 1;
    }
    Some(line.quantity)
  }

  /// Sum of `price × quantity` over all lines; zero for an empty cart.
  pub fn total(&self) -> BigDecimal {
    self
      .lines
      .values()
      .fold(BigDecimal::from(0), |acc, line| acc + line.line_total())
  }

  pub fn line_total(&self, food_id: FoodId) -> Option<BigDecimal> {
    self.lines.get(&food_id).map(CartLine::line_total)
  }

  pub fn quantity(&self, food_id: FoodId) -> Option<u32> {
    self.lines.get(&food_id).map(|l| l.quantity)
  }

  pub fn contains(&self, food_id: FoodId) -> bool {
    self.lines.contains_key(&food_id)
  }

  pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
    self.lines.values()
  }

  /// `(food_id, quantity)` pairs in submission order.
  pub fn submission_plan(&self) -> Vec<(FoodId, u32)> {
    self.lines.values().map(|l| (l.food.id, l.quantity)).collect()
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }

  /// Removes the given lines, ignoring ids that are not selected.
  pub fn drop_lines(&mut self, food_ids: &[FoodId]) {
    for id in food_ids {
      self.lines.remove(id);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn food(id: FoodId, price: &str) -> FoodItem {
    FoodItem {
      id,
      name: format!("food-{id}"),
      description: None,
      image: None,
      price: BigDecimal::from_str(price).unwrap(),
      available: true,
    }
  }

  #[test]
  fn toggling_keeps_the_line_iff_toggled_an_odd_number_of_times() {
    let momo = food(1, "120.00");
    let mut cart = Cart::new();
    for toggles in 1..=6 {
      cart.toggle(&momo);
      assert_eq!(cart.contains(1), toggles % 2 == 1, "after {toggles} toggles");
    }
  }

  #[test]
  fn toggle_inserts_at_quantity_one() {
    let mut cart = Cart::new();
    assert!(cart.toggle(&food(4, "50")));
    assert_eq!(cart.quantity(4), Some(1));
  }

  #[test]
  fn non_positive_quantities_clamp_to_one() {
    let mut cart = Cart::new();
    cart.toggle(&food(1, "10"));
    cart.set_quantity(1, 5);
    for q in [0, -1, -40] {
      assert_eq!(cart.set_quantity(1, q), Some(1));
      cart.set_quantity(1, 5);
    }
  }

  #[test]
  fn set_quantity_on_unknown_line_is_a_no_op() {
    let mut cart = Cart::new();
    assert_eq!(cart.set_quantity(9, 3), None);
    assert!(cart.is_empty());
  }

  #[test]
  fn decrement_stops_at_one_and_keeps_the_line() {
    let mut cart = Cart::new();
    cart.toggle(&food(1, "10"));
    cart.increment(1);
    assert_eq!(cart.decrement(1), Some(1));
    assert_eq!(cart.decrement(1), Some(1));
    assert!(cart.contains(1));
  }

  #[test]
  fn total_is_exact_sum_of_line_totals() {
    let mut cart = Cart::new();
    assert_eq!(cart.total(), BigDecimal::from(0));

    cart.toggle(&food(1, "120.00"));
    cart.toggle(&food(2, "180.00"));
    cart.set_quantity(1, 2);
    assert_eq!(cart.total(), BigDecimal::from(420));
    assert_eq!(cart.line_total(1), Some(BigDecimal::from(240)));
  }

  #[test]
  fn lines_are_snapshots_of_the_toggled_food() {
    let mut cart = Cart::new();
    let mut tea = food(3, "20");
    cart.toggle(&tea);
    tea.price = BigDecimal::from(99);
    assert_eq!(cart.total(), BigDecimal::from(20));
  }

  #[test]
  fn submission_plan_follows_ascending_food_id() {
    let mut cart = Cart::new();
    cart.toggle(&food(12, "1"));
    cart.toggle(&food(3, "1"));
    cart.toggle(&food(7, "1"));
    cart.set_quantity(7, 4);
    assert_eq!(cart.submission_plan(), vec![(3, 1), (7, 4), (12, 1)]);
  }
}
