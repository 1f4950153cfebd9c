// core/src/checkout/orchestrator.rs

use super::report::{CheckoutReport, LineOutcome, LineReport};
use crate::cart::Cart;
use crate::error::{CanteenError, CanteenResult};
use crate::models::{FoodId, Order};
use std::future::Future;
use tracing::{event, instrument, span, Instrument, Level};

pub const EMPTY_CART_MESSAGE: &str = "Please select at least one food item.";

/// Submits every cart line through `submit`, one at a time, in cart order.
///
/// An empty cart fails with [`CanteenError::Validation`] before `submit` is
/// ever called. Otherwise each line's request completes before the next one
/// starts, and the first failure stops the run: later lines are reported as
/// [`LineOutcome::NotAttempted`]. Nothing is rolled back and the cart is not
/// modified; deciding what to do with it is the caller's job.
#[instrument(name = "checkout::place_order", skip_all, fields(lines = cart.len()))]
pub async fn place_order<F, Fut>(cart: &Cart, mut submit: F) -> CanteenResult<CheckoutReport>
where
  F: FnMut(FoodId, u32) -> Fut,
  Fut: Future<Output = CanteenResult<Order>>,
{
  if cart.is_empty() {
    event!(Level::WARN, "Checkout attempted with an empty cart.");
    return Err(CanteenError::validation(EMPTY_CART_MESSAGE));
  }

  let plan = cart.submission_plan();
  let mut report = CheckoutReport {
    lines: Vec::with_capacity(plan.len()),
  };
  let mut halted = false;

  for (line_index, (food_id, quantity)) in plan.into_iter().enumerate() {
    if halted {
      report.lines.push(LineReport {
        food_id,
        quantity,
        outcome: LineOutcome::NotAttempted,
      });
      continue;
    }

    let line_span = span!(Level::INFO, "checkout_line", food_id, quantity, line_index);
    let outcome = match submit(food_id, quantity).instrument(line_span.clone()).await {
      Ok(order) => {
        line_span.in_scope(|| event!(Level::DEBUG, order_id = order.id, "Order line placed."));
        LineOutcome::Placed(order)
      }
      Err(e) => {
        line_span.in_scope(|| event!(Level::ERROR, error = %e, "Order line failed; stopping checkout."));
        halted = true;
        LineOutcome::Failed(e)
      }
    };
    report.lines.push(LineReport {
      food_id,
      quantity,
      outcome,
    });
  }

  if report.is_complete() {
    event!(Level::INFO, placed = report.lines.len(), "Checkout completed.");
  } else {
    event!(
      Level::WARN,
      placed = report.placed_ids().len(),
      pending = report.pending_ids().len(),
      "Checkout stopped after a failed line."
    );
  }
  Ok(report)
}
