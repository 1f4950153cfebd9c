// app/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use canteen::{auth, RegistrationRequest};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::dto::LoginPayload;
use crate::web::extract::VisitorId;

#[instrument(
    name = "handler::login",
    skip(app_state, visitor, req_payload),
    fields(visitor = %visitor.id, username = %req_payload.username)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  visitor: VisitorId,
  req_payload: web::Json<LoginPayload>,
) -> Result<HttpResponse, AppError> {
  // Only a successful sign-in registers the visitor.
  let candidate = match app_state.visitors.get(visitor.id) {
    Some(existing) => existing,
    None => app_state.visitors.open(visitor.id).await?,
  };
  let response = auth::sign_in(
    candidate.dashboard.api().as_ref(),
    candidate.session(),
    &req_payload.username,
    &req_payload.password,
  )
  .await?;
  app_state.visitors.admit(candidate);

  info!("Visitor signed in.");
  let mut builder = HttpResponse::Ok();
  visitor.remember(&mut builder);
  Ok(builder.json(json!({
      "message": "Login successful.",
      "user": response.user,
  })))
}

#[instrument(
    name = "handler::register",
    skip(app_state, req_payload),
    fields(username = %req_payload.username)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, AppError> {
  let api = app_state.visitors.anonymous_api();
  let message = auth::register(api.as_ref(), &req_payload).await?;
  info!("Registration accepted upstream.");
  Ok(HttpResponse::Created().json(json!({ "message": message })))
}

#[instrument(name = "handler::logout", skip(app_state, visitor), fields(visitor = %visitor.id))]
pub async fn logout_handler(app_state: web::Data<AppState>, visitor: VisitorId) -> Result<HttpResponse, AppError> {
  if !visitor.fresh {
    // Restores a persisted session first so its file is removed as well.
    if let Some(known) = app_state.visitors.find(visitor.id).await? {
      known.dashboard.logout().await?;
    }
  }
  app_state.visitors.forget(visitor.id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Logged out." })))
}
