// core/src/checkout/report.rs

use crate::error::CanteenError;
use crate::models::{FoodId, Order};

/// What happened to one cart line during a checkout.
#[derive(Debug)]
pub enum LineOutcome {
  /// The upstream recorded the order. It stays recorded whatever happens
  /// to later lines.
  Placed(Order),
  Failed(CanteenError),
  /// Skipped because an earlier line failed.
  NotAttempted,
}

impl LineOutcome {
  pub fn label(&self) -> &'static str {
    match self {
      LineOutcome::Placed(_) => "placed",
      LineOutcome::Failed(_) => "failed",
      LineOutcome::NotAttempted => "not_attempted",
    }
  }
}

#[derive(Debug)]
pub struct LineReport {
  pub food_id: FoodId,
  pub quantity: u32,
  pub outcome: LineOutcome,
}

/// Per-line result of one checkout, in submission order.
#[derive(Debug, Default)]
pub struct CheckoutReport {
  pub lines: Vec<LineReport>,
}

impl CheckoutReport {
  /// True when every line was placed.
  pub fn is_complete(&self) -> bool {
    !self.lines.is_empty() && self.lines.iter().all(|l| matches!(l.outcome, LineOutcome::Placed(_)))
  }

  /// The failure that stopped the checkout, if any.
  pub fn first_error(&self) -> Option<&CanteenError> {
    self.lines.iter().find_map(|l| match &l.outcome {
      LineOutcome::Failed(e) => Some(e),
      _ => None,
    })
  }

  pub fn placed_ids(&self) -> Vec<FoodId> {
    self
      .lines
      .iter()
      .filter(|l| matches!(l.outcome, LineOutcome::Placed(_)))
      .map(|l| l.food_id)
      .collect()
  }

  /// Lines that still need to be submitted: the failed one and everything after it.
  pub fn pending_ids(&self) -> Vec<FoodId> {
    self
      .lines
      .iter()
      .filter(|l| !matches!(l.outcome, LineOutcome::Placed(_)))
      .map(|l| l.food_id)
      .collect()
  }

  pub fn placed_orders(&self) -> impl Iterator<Item = &Order> {
    self.lines.iter().filter_map(|l| match &l.outcome {
      LineOutcome::Placed(order) => Some(order),
      _ => None,
    })
  }

  pub fn attempted(&self) -> usize {
    self
      .lines
      .iter()
      .filter(|l| !matches!(l.outcome, LineOutcome::NotAttempted))
      .count()
  }
}
