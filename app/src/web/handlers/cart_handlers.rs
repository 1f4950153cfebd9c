// app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use canteen::FoodId;
use tracing::{debug, instrument};

use super::authenticated_visitor;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::dto::{parse_quantity, QuantityPayload};
use crate::web::extract::VisitorId;

#[instrument(name = "handler::cart_toggle", skip(app_state, visitor), fields(visitor = %visitor.id))]
pub async fn toggle_handler(
  app_state: web::Data<AppState>,
  visitor: VisitorId,
  path: web::Path<FoodId>,
) -> Result<HttpResponse, AppError> {
  let known = authenticated_visitor(&app_state, &visitor).await?;
  let selected = known.dashboard.toggle(path.into_inner())?;
  debug!(selected, "Cart selection toggled.");
  Ok(HttpResponse::Ok().json(known.dashboard.snapshot()))
}

#[instrument(
    name = "handler::cart_quantity",
    skip(app_state, visitor, req_payload),
    fields(visitor = %visitor.id, food_id = req_payload.food_id)
)]
pub async fn set_quantity_handler(
  app_state: web::Data<AppState>,
  visitor: VisitorId,
  req_payload: web::Json<QuantityPayload>,
) -> Result<HttpResponse, AppError> {
  let known = authenticated_visitor(&app_state, &visitor).await?;
  // Unselected items are ignored, like a hidden quantity input.
  known
    .dashboard
    .set_quantity(req_payload.food_id, parse_quantity(&req_payload.quantity))?;
  Ok(HttpResponse::Ok().json(known.dashboard.snapshot()))
}

#[instrument(name = "handler::cart_increment", skip(app_state, visitor), fields(visitor = %visitor.id))]
pub async fn increment_handler(
  app_state: web::Data<AppState>,
  visitor: VisitorId,
  path: web::Path<FoodId>,
) -> Result<HttpResponse, AppError> {
  let known = authenticated_visitor(&app_state, &visitor).await?;
  known.dashboard.increment(path.into_inner())?;
  Ok(HttpResponse::Ok().json(known.dashboard.snapshot()))
}

#[instrument(name = "handler::cart_decrement", skip(app_state, visitor), fields(visitor = %visitor.id))]
pub async fn decrement_handler(
  app_state: web::Data<AppState>,
  visitor: VisitorId,
  path: web::Path<FoodId>,
) -> Result<HttpResponse, AppError> {
  let known = authenticated_visitor(&app_state, &visitor).await?;
  known.dashboard.decrement(path.into_inner())?;
  Ok(HttpResponse::Ok().json(known.dashboard.snapshot()))
}
