// app/src/web/handlers/dashboard_handlers.rs

use actix_web::{web, HttpResponse};
use canteen::{CanteenError, LoadState};
use tracing::{instrument, warn};

use super::authenticated_visitor;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::dto::TabPayload;
use crate::web::extract::VisitorId;

/// Reloads menu, orders and dues, then renders the dashboard.
#[instrument(name = "handler::dashboard", skip(app_state, visitor), fields(visitor = %visitor.id))]
pub async fn dashboard_handler(app_state: web::Data<AppState>, visitor: VisitorId) -> Result<HttpResponse, AppError> {
  let known = authenticated_visitor(&app_state, &visitor).await?;
  match known.dashboard.load_all().await {
    LoadState::Ready(_) => Ok(HttpResponse::Ok().json(known.dashboard.snapshot())),
    LoadState::Unauthenticated => Err(CanteenError::Unauthenticated.into()),
    LoadState::Failed(e) => {
      warn!(error = %e, "Dashboard load failed.");
      Err(e.into())
    }
  }
}

#[instrument(name = "handler::select_tab", skip(app_state, visitor, req_payload), fields(visitor = %visitor.id, tab = ?req_payload.tab))]
pub async fn select_tab_handler(
  app_state: web::Data<AppState>,
  visitor: VisitorId,
  req_payload: web::Json<TabPayload>,
) -> Result<HttpResponse, AppError> {
  let known = authenticated_visitor(&app_state, &visitor).await?;
  known.dashboard.select_tab(req_payload.tab);
  Ok(HttpResponse::Ok().json(known.dashboard.snapshot()))
}
