// app/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use super::authenticated_visitor;
use crate::errors::{status_for, AppError};
use crate::state::AppState;
use crate::web::dto::{CheckoutLineView, CheckoutQuery};
use crate::web::extract::VisitorId;

pub const ORDER_PLACED_MESSAGE: &str = "Orders placed successfully!";

/// Places one order per cart line, in cart order, stopping at the first
/// failure.
///
/// A partial failure answers with the upstream's status and the per-line
/// outcome; the cart is kept unless `?discard_placed=true` was given.
#[instrument(
    name = "handler::checkout",
    skip(app_state, visitor, query),
    fields(visitor = %visitor.id, discard_placed = query.discard_placed)
)]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  visitor: VisitorId,
  query: web::Query<CheckoutQuery>,
) -> Result<HttpResponse, AppError> {
  let known = authenticated_visitor(&app_state, &visitor).await?;
  let report = known.dashboard.checkout().await?;
  let lines = CheckoutLineView::from_report(&report);

  if let Some(e) = report.first_error() {
    warn!(
      placed = report.placed_ids().len(),
      pending = report.pending_ids().len(),
      "Checkout stopped part-way."
    );
    if query.discard_placed {
      known.dashboard.discard_placed_lines(&report)?;
    }
    return Err(AppError::PartialCheckout {
      status: status_for(e),
      message: e.user_message(),
      lines,
    });
  }

  info!(orders = lines.len(), "Checkout complete.");
  Ok(HttpResponse::Ok().json(json!({
      "message": ORDER_PLACED_MESSAGE,
      "lines": lines,
      "dashboard": known.dashboard.snapshot(),
  })))
}
